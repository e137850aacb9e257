use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// A named place from the catalogue. Produced fresh on every catalogue fetch
/// and never mutated by the selection engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub name: String,
    pub coordinates: Coordinates,
    /// Opaque flag asset reference (an SVG URL for REST Countries).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Location {
            name: name.into(),
            coordinates,
            flag: None,
        }
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    /// Key used for exclusion and deduplication: trimmed, lowercased name.
    pub fn key(&self) -> String {
        name_key(&self.name)
    }

    pub fn distance_to(&self, other: &Location) -> f64 {
        self.coordinates.distance_to(&other.coordinates)
    }
}

/// Normalize a country name for case-insensitive comparison.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A Location annotated with the distance the engine computed for it.
///
/// In anchored selections `distance_km` is the distance to the reference; in
/// spread selections it is the mean distance to the other selected members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    #[serde(flatten)]
    pub location: Location,
    pub distance_km: f64,
}

impl Candidate {
    pub fn new(location: Location, distance_km: f64) -> Self {
        Candidate {
            location,
            distance_km,
        }
    }

    pub fn name(&self) -> &str {
        &self.location.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_key_normalization() {
        assert_eq!(name_key("  France "), "france");
        assert_eq!(name_key("CÔTE D'IVOIRE"), "côte d'ivoire");
        let japan = Location::new("Japan", Coordinates::new(36.0, 138.0).unwrap());
        assert_eq!(japan.key(), "japan");
    }

    #[test]
    fn test_candidate_serializes_flattened() {
        let location = Location::new("Chile", Coordinates::new(-30.0, -71.0).unwrap())
            .with_flag("https://flagcdn.com/cl.svg");
        let candidate = Candidate::new(location, 11_234.5);

        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["name"], "Chile");
        assert_eq!(json["coordinates"]["lat"], -30.0);
        assert_eq!(json["flag"], "https://flagcdn.com/cl.svg");
        assert_eq!(json["distance_km"], 11_234.5);
    }

    #[test]
    fn test_location_without_flag_deserializes() {
        let json = serde_json::json!({
            "name": "Nepal",
            "coordinates": {"lat": 28.0, "lng": 84.0}
        });
        let location: Location = serde_json::from_value(json).unwrap();
        assert_eq!(location.flag, None);
        assert_eq!(location.coordinates.lng, 84.0);
    }
}
