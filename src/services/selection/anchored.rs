use crate::models::{Candidate, Location};
use rand::{seq::index, Rng};
use std::collections::HashSet;

/// Select up to `count` locations lying at least `min_distance_km` from `reference`.
///
/// The reference itself and any name in `exclude` (normalized keys) are never
/// returned. When more locations qualify than requested, a uniform random
/// sample without replacement is drawn, so repeated calls with the same
/// input vary. When fewer qualify, all of them are returned; no relaxation
/// happens here.
pub fn select_anchored<R>(
    reference: &Location,
    locations: &[Location],
    min_distance_km: f64,
    count: usize,
    exclude: &HashSet<String>,
    rng: &mut R,
) -> Vec<Candidate>
where
    R: Rng + ?Sized,
{
    let reference_key = reference.key();

    let qualifying: Vec<(&Location, f64)> = locations
        .iter()
        .filter(|location| {
            let key = location.key();
            key != reference_key && !exclude.contains(&key)
        })
        .map(|location| (location, reference.distance_to(location)))
        .filter(|(_, distance)| *distance >= min_distance_km)
        .collect();

    if qualifying.len() <= count {
        return qualifying
            .into_iter()
            .map(|(location, distance)| Candidate::new(location.clone(), distance))
            .collect();
    }

    index::sample(rng, qualifying.len(), count)
        .into_iter()
        .map(|idx| {
            let (location, distance) = qualifying[idx];
            Candidate::new(location.clone(), distance)
        })
        .collect()
}
