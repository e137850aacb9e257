use crate::error::Result;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct RecordVisitRequest {
    pub country_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LatestVisitResponse {
    pub name: Option<String>,
}

/// GET /visits/latest
pub async fn latest_visit(State(state): State<Arc<AppState>>) -> Result<Json<LatestVisitResponse>> {
    let name = state.ledger.last_visited().await?;
    Ok(Json(LatestVisitResponse { name }))
}

/// POST /visits
/// Record the country the user is heading to next
pub async fn record_visit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecordVisitRequest>,
) -> Result<StatusCode> {
    state.ledger.record_visit(&request.country_name).await?;
    tracing::info!("Recorded next country: {}", request.country_name.trim());
    Ok(StatusCode::NO_CONTENT)
}
