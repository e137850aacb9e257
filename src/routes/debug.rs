use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if collaborators are reachable
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    // Check catalogue
    match state.catalogue.fetch_all().await {
        Ok(locations) if !locations.is_empty() => {
            status["checks"]["catalogue"] = json!({
                "backend": state.catalogue.backend_name(),
                "locations": locations.len(),
            });
        }
        Ok(_) => {
            status["checks"]["catalogue"] = json!({
                "backend": state.catalogue.backend_name(),
                "error": "catalogue is empty",
            });
            status["status"] = json!("degraded");
        }
        Err(e) => {
            status["checks"]["catalogue"] = json!({
                "backend": state.catalogue.backend_name(),
                "error": e.to_string(),
            });
            status["status"] = json!("error");
        }
    }

    // Check visit ledger
    match state.ledger.last_visited().await {
        Ok(last) => {
            status["checks"]["ledger"] = json!({
                "backend": state.ledger.backend_name(),
                "last_visited": last,
            });
        }
        Err(e) => {
            status["checks"]["ledger"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    Json(status)
}
