//! Farthest-set selection engine.
//!
//! Pure and synchronous: no I/O, no logging, no shared state. The only
//! non-determinism comes from the random source passed in by the caller.

mod anchored;
mod spread;

pub use anchored::select_anchored;
pub use spread::select_spread;

use crate::error::SelectionError;
use crate::models::{
    name_key, Candidate, Location, SelectionMode, SelectionRequest, SelectionResult,
};
use rand::Rng;
use std::collections::HashSet;

/// Select countries from `catalogue` according to `request`.
///
/// With a reference, candidates must clear `min_distance_km` from it (hard
/// filter, possibly fewer than `count` results). Without one, the greedy
/// spread selector runs and `min_distance_km` is only a target: a clustered
/// catalogue still yields a best-effort result with `threshold_met == false`.
pub fn select<R>(
    request: &SelectionRequest,
    catalogue: &[Location],
    rng: &mut R,
) -> Result<SelectionResult, SelectionError>
where
    R: Rng + ?Sized,
{
    request
        .validate()
        .map_err(SelectionError::InvalidRequest)?;

    let usable = usable_locations(catalogue);
    if usable.is_empty() {
        return Err(SelectionError::EmptyCatalogue);
    }

    let exclude: HashSet<String> = request.exclude.iter().map(|name| name_key(name)).collect();

    match request.reference_name() {
        Some(name) => {
            let reference = resolve_reference(name, &usable)
                .ok_or_else(|| SelectionError::ReferenceNotFound(name.to_string()))?;

            let candidates = finalize(
                select_anchored(
                    reference,
                    &usable,
                    request.min_distance_km,
                    request.count,
                    &exclude,
                    rng,
                ),
                request.count,
            );
            let threshold_met = candidates
                .iter()
                .all(|c| c.distance_km >= request.min_distance_km);

            Ok(SelectionResult {
                mode: SelectionMode::Anchored,
                reference: Some(reference.clone()),
                min_pairwise_km: min_pairwise_km(&candidates),
                candidates,
                threshold_met,
            })
        }
        None => {
            let candidates = finalize(
                select_spread(&usable, request.count, &exclude, rng),
                request.count,
            );
            let min_pairwise = min_pairwise_km(&candidates);

            Ok(SelectionResult {
                mode: SelectionMode::Spread,
                reference: None,
                threshold_met: min_pairwise.map_or(true, |d| d >= request.min_distance_km),
                min_pairwise_km: min_pairwise,
                candidates,
            })
        }
    }
}

/// Resolve a reference name: exact match first, then case-insensitive.
/// The first match in catalogue order wins.
pub fn resolve_reference<'a>(name: &str, catalogue: &'a [Location]) -> Option<&'a Location> {
    let name = name.trim();
    catalogue
        .iter()
        .find(|location| location.name == name)
        .or_else(|| {
            let key = name_key(name);
            catalogue.iter().find(|location| location.key() == key)
        })
}

/// Smallest distance between any two candidates; `None` below two entries.
pub fn min_pairwise_km(candidates: &[Candidate]) -> Option<f64> {
    candidates
        .iter()
        .enumerate()
        .flat_map(|(i, a)| {
            candidates[i + 1..]
                .iter()
                .map(move |b| a.location.distance_to(&b.location))
        })
        .reduce(f64::min)
}

/// Drop blank names and invalid coordinates, keep the first of each name.
fn usable_locations(catalogue: &[Location]) -> Vec<Location> {
    let mut seen = HashSet::new();
    catalogue
        .iter()
        .filter(|location| !location.name.trim().is_empty() && location.coordinates.is_valid())
        .filter(|location| seen.insert(location.key()))
        .cloned()
        .collect()
}

fn finalize(candidates: Vec<Candidate>, count: usize) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.location.key()))
        .take(count)
        .collect()
}
