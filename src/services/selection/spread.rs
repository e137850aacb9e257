//! Greedy farthest-point selection (max-min dispersion).
//!
//! Picking `k` points that maximize their minimum pairwise distance is
//! NP-hard, so this uses the classic greedy heuristic: seed with a random
//! point, then repeatedly add the point farthest from everything already
//! chosen. The result is an approximation, not an optimum. Each round updates
//! a per-candidate "distance to nearest selected" value against the newest
//! member only, giving O(count × pool) distance evaluations.

use crate::models::{Candidate, Location};
use rand::Rng;
use std::collections::HashSet;

/// Build a set of up to `count` mutually distant locations.
///
/// Names in `exclude` (normalized keys) are skipped. The first member is
/// drawn uniformly at random; every later member is the remaining location
/// whose nearest selected neighbour is farthest away, ties going to the
/// earliest in input order. Returned candidates carry their mean distance to
/// the other selected members.
pub fn select_spread<R>(
    locations: &[Location],
    count: usize,
    exclude: &HashSet<String>,
    rng: &mut R,
) -> Vec<Candidate>
where
    R: Rng + ?Sized,
{
    let pool: Vec<&Location> = locations
        .iter()
        .filter(|location| !exclude.contains(&location.key()))
        .collect();

    if pool.is_empty() || count == 0 {
        return Vec::new();
    }

    let first = rng.random_range(0..pool.len());
    let mut last = pool[first];
    let mut selected: Vec<&Location> = vec![last];

    // Unselected pool in input order, paired with the distance to its
    // nearest selected member.
    let mut remaining: Vec<(&Location, f64)> = pool
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != first)
        .map(|(_, location)| (*location, f64::INFINITY))
        .collect();

    while selected.len() < count && !remaining.is_empty() {
        let mut best: Option<usize> = None;
        let mut best_distance = f64::NEG_INFINITY;

        for (idx, (location, nearest)) in remaining.iter_mut().enumerate() {
            *nearest = nearest.min(last.distance_to(location));
            // Strict comparison keeps the first candidate on ties.
            if *nearest > best_distance {
                best_distance = *nearest;
                best = Some(idx);
            }
        }

        let Some(idx) = best else { break };
        let (location, _) = remaining.remove(idx);
        selected.push(location);
        last = location;
    }

    with_mean_distances(&selected)
}

/// Annotate each member with its mean distance to the other members.
/// Display aid only; the selection above never reads it.
fn with_mean_distances(selected: &[&Location]) -> Vec<Candidate> {
    let others = selected.len().saturating_sub(1);

    selected
        .iter()
        .enumerate()
        .map(|(i, location)| {
            let mean = if others == 0 {
                0.0
            } else {
                let total: f64 = selected
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, other)| location.distance_to(other))
                    .sum();
                total / others as f64
            };
            Candidate::new((*location).clone(), mean)
        })
        .collect()
}
