use crate::catalogue::CatalogueProvider;
use crate::config::SelectorConfig;
use crate::error::{AppError, Result, SelectionError};
use crate::ledger::VisitLedger;
use crate::models::{PickRequest, SelectionRequest, SelectionResult};
use crate::services::selection;
use rand::Rng;
use std::sync::Arc;

/// Connects the catalogue and the visit ledger to the selection engine.
///
/// Reads the ledger but never writes it; recording a visit is the caller's
/// decision.
pub struct CountryPicker {
    catalogue: Arc<dyn CatalogueProvider>,
    ledger: Arc<dyn VisitLedger>,
    config: SelectorConfig,
}

impl CountryPicker {
    pub fn new(
        catalogue: Arc<dyn CatalogueProvider>,
        ledger: Arc<dyn VisitLedger>,
        config: SelectorConfig,
    ) -> Self {
        Self {
            catalogue,
            ledger,
            config,
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Pick countries for `params`, drawing randomness from `rng`.
    pub async fn pick<R>(&self, params: &PickRequest, rng: &mut R) -> Result<SelectionResult>
    where
        R: Rng + Send + ?Sized,
    {
        let count = params.count.unwrap_or(self.config.count);
        if count > self.config.max_count {
            return Err(AppError::InvalidRequest(format!(
                "count must not exceed {}",
                self.config.max_count
            )));
        }

        let (catalogue, last_visited) =
            futures::try_join!(self.catalogue.fetch_all(), self.ledger.last_visited())?;

        let requested = params
            .reference
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| {
                if params.from_last_visit {
                    last_visited.clone()
                } else {
                    None
                }
            });

        // An empty catalogue is reported by the engine, not as a missing reference.
        let reference = match requested {
            Some(name) if !catalogue.is_empty() => Some(self.canonical_name(&name).await?),
            other => other,
        };

        let mut request = SelectionRequest {
            reference,
            min_distance_km: params.min_distance_km.unwrap_or(self.config.min_distance_km),
            count,
            ..Default::default()
        }
        .excluding(params.exclude.iter().map(String::as_str))
        .excluding(last_visited.iter().map(String::as_str));
        request.exclude.retain(|name| !name.trim().is_empty());

        tracing::info!(
            reference = request.reference.as_deref().unwrap_or("-"),
            min_distance_km = request.min_distance_km,
            count = request.count,
            excluded = request.exclude.len(),
            catalogue_size = catalogue.len(),
            "Selecting {} countries (reference: {}, min distance {:.0}km)",
            request.count,
            request.reference.as_deref().unwrap_or("none"),
            request.min_distance_km
        );

        let result = selection::select(&request, &catalogue, rng)?;

        if !result.threshold_met {
            tracing::debug!(
                "Spread target of {:.0}km not reached (achieved {:.0}km), returning best effort",
                request.min_distance_km,
                result.min_pairwise_km.unwrap_or(0.0)
            );
        }
        if result.len() < request.count {
            tracing::info!(
                "Only {} of {} requested countries qualified",
                result.len(),
                request.count
            );
        }

        Ok(result)
    }

    /// Map a user-typed name onto the catalogue's spelling via the provider.
    /// Ambiguous names take the first match.
    async fn canonical_name(&self, name: &str) -> Result<String> {
        let matches = self.catalogue.resolve(name).await?;
        if matches.len() > 1 {
            tracing::debug!(
                "'{}' matched {} countries, using '{}'",
                name,
                matches.len(),
                matches[0].name
            );
        }

        matches
            .into_iter()
            .next()
            .map(|location| location.name)
            .ok_or_else(|| SelectionError::ReferenceNotFound(name.to_string()).into())
    }
}
