pub mod debug;
pub mod selections;
pub mod visits;

use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/selections", post(selections::create_selection))
        .route("/visits", post(visits::record_visit))
        .route("/visits/latest", get(visits::latest_visit))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
