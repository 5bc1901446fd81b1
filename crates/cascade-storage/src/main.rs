//! Entry point for the cascade-storage binary.

use axum::middleware;
use cascade_http::middleware::{
    logging::{ServiceName, log_requests},
    request_id::{propagate_request_id, request_id_layer},
};
use cascade_storage::{StorageConfig, state::AppState};
use cascade_store::{Store, StoreConfig};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = StorageConfig::from_env()?;

    // Initialize tracing
    cascade_http::init_tracing(&config.log_level);

    tracing::info!(
        service = %config.service_name,
        port = config.port,
        "Starting storage tier"
    );

    // Open the embedded database and apply the schema
    let store_config = StoreConfig::from_env()?;
    let store = Store::connect(store_config).await?;

    // Build application state
    let state = AppState::new(store, &config.service_name);

    // Build router with middleware
    let app = cascade_storage::routes::build_router(state)
        .layer(middleware::from_fn_with_state(
            ServiceName::new(&config.service_name),
            log_requests,
        ))
        .layer(middleware::from_fn(propagate_request_id))
        .layer(request_id_layer())
        .layer(TraceLayer::new_for_http());

    // Create listener
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    // Run server with graceful shutdown
    cascade_http::serve(listener, app).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
