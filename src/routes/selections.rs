use crate::error::Result;
use crate::models::{PickRequest, SelectionResult};
use crate::AppState;
use axum::{extract::State, Json};
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;

/// POST /selections
/// Pick countries far from a reference, or far from each other without one
pub async fn create_selection(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PickRequest>,
) -> Result<Json<SelectionResult>> {
    let seed = request.seed.unwrap_or_else(rand::random);

    tracing::info!(
        reference = request.reference.as_deref().unwrap_or("-"),
        count = ?request.count,
        min_distance_km = ?request.min_distance_km,
        from_last_visit = request.from_last_visit,
        seed,
        "Selection request: reference={:?}, seed={}",
        request.reference, seed
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let result = state.picker.pick(&request, &mut rng).await?;

    tracing::info!(
        mode = ?result.mode,
        picks = ?result.names(),
        "Selected {} countries",
        result.len()
    );

    Ok(Json(result))
}
