use crate::catalogue::CatalogueProvider;
use crate::error::{AppError, Result};
use crate::models::{name_key, Location};
use async_trait::async_trait;
use std::path::Path;

/// Fixed in-memory catalogue, used offline and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogue {
    locations: Vec<Location>,
}

impl StaticCatalogue {
    pub fn new(locations: Vec<Location>) -> Self {
        StaticCatalogue { locations }
    }

    /// Load a JSON array of locations (`[{"name", "coordinates", "flag"?}]`).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Internal(format!(
                "Failed to read catalogue file {}: {}",
                path.display(),
                e
            ))
        })?;
        let locations: Vec<Location> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Internal(format!(
                "Invalid catalogue file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::new(locations))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[async_trait]
impl CatalogueProvider for StaticCatalogue {
    async fn fetch_all(&self) -> Result<Vec<Location>> {
        Ok(self.locations.clone())
    }

    /// Exact (case-insensitive) matches win; otherwise fall back to
    /// substring matches, in catalogue order.
    async fn resolve(&self, name: &str) -> Result<Vec<Location>> {
        let key = name_key(name);
        if key.is_empty() {
            return Ok(Vec::new());
        }

        let exact: Vec<Location> = self
            .locations
            .iter()
            .filter(|location| location.key() == key)
            .cloned()
            .collect();
        if !exact.is_empty() {
            return Ok(exact);
        }

        Ok(self
            .locations
            .iter()
            .filter(|location| location.key().contains(&key))
            .cloned()
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        "static"
    }
}
