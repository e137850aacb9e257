mod restcountries;
mod static_catalogue;

pub use restcountries::RestCountriesClient;
pub use static_catalogue::StaticCatalogue;

use crate::config::{CatalogueConfig, CatalogueSource};
use crate::error::{AppError, Result};
use crate::models::Location;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of candidate locations.
///
/// Implementations fetch; they do not retry or cache. The selection engine
/// only ever sees the `Vec<Location>` they return.
#[async_trait]
pub trait CatalogueProvider: Send + Sync {
    /// Every known location with coordinates.
    async fn fetch_all(&self) -> Result<Vec<Location>>;

    /// Locations matching `name`, case-insensitively. Ambiguous names may
    /// return several matches; callers take the first.
    async fn resolve(&self, name: &str) -> Result<Vec<Location>>;

    /// Backend name for logging and health reporting
    fn backend_name(&self) -> &'static str;
}

/// Build the provider selected by configuration.
pub fn from_config(config: &CatalogueConfig) -> Result<Arc<dyn CatalogueProvider>> {
    match config.source {
        CatalogueSource::RestCountries => {
            tracing::info!("Using REST Countries catalogue at {}", config.base_url);
            Ok(Arc::new(RestCountriesClient::with_config(
                config.base_url.clone(),
                config.timeout_secs,
            )?))
        }
        CatalogueSource::File => {
            let path = config.file.as_deref().ok_or_else(|| {
                AppError::Internal("CATALOGUE_FILE must be set for the file catalogue".to_string())
            })?;
            let catalogue = StaticCatalogue::from_json_file(path)?;
            tracing::info!(
                "Loaded {} locations from catalogue file {}",
                catalogue.len(),
                path
            );
            Ok(Arc::new(catalogue))
        }
    }
}
