use axum::Router;
use distant_countries::config::Config;
use distant_countries::ledger::{MemoryVisitLedger, VisitLedger};
use distant_countries::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "distant_countries=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting distant-countries API server");
    tracing::info!(
        min_distance_km = config.selector.min_distance_km,
        count = config.selector.count,
        "Configuration loaded successfully"
    );

    // Initialize collaborators
    let catalogue = distant_countries::catalogue::from_config(&config.catalogue)?;
    let ledger: Arc<dyn VisitLedger> = Arc::new(MemoryVisitLedger::new());
    tracing::info!(
        "Catalogue backend: {}, visit ledger backend: {}",
        catalogue.backend_name(),
        ledger.backend_name()
    );

    // Create application state
    let state = Arc::new(AppState::new(catalogue, ledger, config.selector.clone()));

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", distant_countries::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
