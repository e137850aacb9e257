use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures of the selection engine itself.
///
/// The engine returns these to its caller and never logs or retries; an
/// empty result is not an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Country '{0}' not found, check spelling")]
    ReferenceNotFound(String),

    #[error("Catalogue contains no usable locations")]
    EmptyCatalogue,

    #[error("Invalid selection request: {0}")]
    InvalidRequest(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Catalogue API error: {0}")]
    CatalogueApi(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Selection(SelectionError::ReferenceNotFound(ref name)) => {
                tracing::info!("Reference country not found: {}", name);
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Selection(SelectionError::EmptyCatalogue) => {
                tracing::warn!("Selection attempted against an empty catalogue");
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
            AppError::Selection(SelectionError::InvalidRequest(ref e)) => {
                (StatusCode::BAD_REQUEST, e.clone())
            }
            AppError::CatalogueApi(ref e) => {
                tracing::error!("Catalogue API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Country catalogue unavailable".to_string())
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.clone()),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
