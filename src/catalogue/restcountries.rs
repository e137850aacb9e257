use crate::catalogue::CatalogueProvider;
use crate::constants::{DEFAULT_CATALOGUE_TIMEOUT_SECS, RESTCOUNTRIES_BASE_URL, RESTCOUNTRIES_FIELDS};
use crate::error::{AppError, Result};
use crate::models::{Coordinates, Location};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Catalogue backed by the REST Countries v3.1 API.
#[derive(Clone)]
pub struct RestCountriesClient {
    client: Client,
    base_url: String,
}

impl RestCountriesClient {
    pub fn new() -> Result<Self> {
        Self::with_config(
            RESTCOUNTRIES_BASE_URL.to_string(),
            DEFAULT_CATALOGUE_TIMEOUT_SECS,
        )
    }

    pub fn with_config(base_url: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(RestCountriesClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `Ok(None)` on 404; the caller decides whether that means "no match".
    async fn get_countries(&self, url: &str) -> Result<Option<Vec<RestCountry>>> {
        tracing::debug!("REST Countries request: {}", url);

        let response = self
            .client
            .get(url)
            .query(&[("fields", RESTCOUNTRIES_FIELDS)])
            .send()
            .await
            .map_err(|e| AppError::CatalogueApi(format!("Request failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                "REST Countries HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::CatalogueApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let countries: Vec<RestCountry> = response
            .json()
            .await
            .map_err(|e| AppError::CatalogueApi(format!("Failed to parse response: {}", e)))?;

        Ok(Some(countries))
    }
}

#[async_trait]
impl CatalogueProvider for RestCountriesClient {
    async fn fetch_all(&self) -> Result<Vec<Location>> {
        let url = format!("{}/all", self.base_url);
        let countries = self.get_countries(&url).await?.ok_or_else(|| {
            tracing::warn!("REST Countries catalogue not found at {}", url);
            AppError::CatalogueApi(format!("HTTP 404 Not Found: {}", url))
        })?;

        let total = countries.len();
        let locations: Vec<Location> = countries
            .into_iter()
            .filter_map(RestCountry::into_location)
            .collect();

        tracing::debug!(
            fetched = total,
            usable = locations.len(),
            "REST Countries catalogue: {} of {} entries usable",
            locations.len(),
            total
        );
        Ok(locations)
    }

    async fn resolve(&self, name: &str) -> Result<Vec<Location>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/name/{}", self.base_url, urlencoding::encode(name));
        Ok(self
            .get_countries(&url)
            .await?
            .unwrap_or_default()
            .into_iter()
            .filter_map(RestCountry::into_location)
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        "restcountries"
    }
}

// REST Countries API response types

#[derive(Debug, Deserialize)]
struct RestCountry {
    name: RestCountryName,
    #[serde(default)]
    latlng: Option<Vec<f64>>,
    #[serde(default)]
    flags: Option<RestCountryFlags>,
}

#[derive(Debug, Deserialize)]
struct RestCountryName {
    common: String,
}

#[derive(Debug, Deserialize)]
struct RestCountryFlags {
    #[serde(default)]
    svg: Option<String>,
    #[serde(default)]
    png: Option<String>,
}

impl RestCountry {
    /// Entries without a usable `[lat, lng]` pair are skipped.
    fn into_location(self) -> Option<Location> {
        let (lat, lng) = match self.latlng.as_deref().unwrap_or_default() {
            [lat, lng, ..] => (*lat, *lng),
            _ => {
                tracing::debug!("Skipping '{}': no coordinates", self.name.common);
                return None;
            }
        };

        let coordinates = match Coordinates::new(lat, lng) {
            Ok(coordinates) => coordinates,
            Err(e) => {
                tracing::debug!("Skipping '{}': {}", self.name.common, e);
                return None;
            }
        };

        Some(Location {
            name: self.name.common,
            coordinates,
            flag: self.flags.and_then(|flags| flags.svg.or(flags.png)),
        })
    }
}
