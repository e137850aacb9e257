use crate::constants::{DEFAULT_MIN_DISTANCE_KM, DEFAULT_SELECTION_COUNT};
use crate::models::{Candidate, Location};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What the engine is asked to do for one selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionRequest {
    /// Reference country name. Absent or blank means "no anchor".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default = "default_min_distance_km")]
    pub min_distance_km: f64,
    #[serde(default = "default_count")]
    pub count: usize,
    /// Names to omit, typically the visit ledger's prior picks.
    #[serde(default)]
    pub exclude: BTreeSet<String>,
}

fn default_min_distance_km() -> f64 {
    DEFAULT_MIN_DISTANCE_KM
}

fn default_count() -> usize {
    DEFAULT_SELECTION_COUNT
}

impl Default for SelectionRequest {
    fn default() -> Self {
        SelectionRequest {
            reference: None,
            min_distance_km: default_min_distance_km(),
            count: default_count(),
            exclude: BTreeSet::new(),
        }
    }
}

impl SelectionRequest {
    pub fn anchored(reference: impl Into<String>) -> Self {
        SelectionRequest {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_min_distance_km(mut self, min_distance_km: f64) -> Self {
        self.min_distance_km = min_distance_km;
        self
    }

    pub fn excluding<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// The reference name, if one was given and is not blank.
    pub fn reference_name(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.count < 1 {
            return Err("count must be at least 1".to_string());
        }
        if !self.min_distance_km.is_finite() || self.min_distance_km <= 0.0 {
            return Err(format!(
                "min_distance_km must be a positive number, got {}",
                self.min_distance_km
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Filtered by distance from a reference country.
    Anchored,
    /// Greedy farthest-point spread, no reference.
    Spread,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionResult {
    pub mode: SelectionMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Location>,
    pub candidates: Vec<Candidate>,
    /// Smallest distance between any two returned candidates.
    pub min_pairwise_km: Option<f64>,
    /// Whether the result honours `min_distance_km`. Always true for anchored
    /// selections; spread selections treat the threshold as a soft target.
    pub threshold_met: bool,
}

impl SelectionResult {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.candidates.iter().map(Candidate::name).collect()
    }
}

/// Body of `POST /selections`. Unset fields fall back to the configured
/// selector defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PickRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Anchor on the last visited country when no reference is given.
    #[serde(default)]
    pub from_last_visit: bool,
    /// Seed for a reproducible selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_from_json() {
        let request: SelectionRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(request.reference, None);
        assert_eq!(request.min_distance_km, 1500.0);
        assert_eq!(request.count, 3);
        assert!(request.exclude.is_empty());
    }

    #[test]
    fn test_blank_reference_means_no_anchor() {
        let request = SelectionRequest::anchored("   ");
        assert_eq!(request.reference_name(), None);

        let request = SelectionRequest::anchored(" France ");
        assert_eq!(request.reference_name(), Some("France"));
    }

    #[test]
    fn test_validation() {
        assert!(SelectionRequest::default().validate().is_ok());
        assert!(SelectionRequest::default().with_count(0).validate().is_err());
        assert!(SelectionRequest::default()
            .with_min_distance_km(0.0)
            .validate()
            .is_err());
        assert!(SelectionRequest::default()
            .with_min_distance_km(-10.0)
            .validate()
            .is_err());
        assert!(SelectionRequest::default()
            .with_min_distance_km(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_pick_request_defaults() {
        let request: PickRequest =
            serde_json::from_value(serde_json::json!({"reference": "Peru"})).unwrap();
        assert_eq!(request.reference.as_deref(), Some("Peru"));
        assert_eq!(request.count, None);
        assert!(!request.from_last_visit);
        assert!(request.exclude.is_empty());
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(
            serde_json::to_value(SelectionMode::Spread).unwrap(),
            serde_json::json!("spread")
        );
    }
}
