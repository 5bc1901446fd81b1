//! Entry point for the cascade-backend binary.

use axum::middleware;
use cascade_backend::{AppState, BackendConfig, EventRecorder, Notifier};
use cascade_http::{
    Relay,
    middleware::{
        logging::{ServiceName, log_requests},
        request_id::{propagate_request_id, request_id_layer},
    },
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = BackendConfig::from_env()?;

    // Initialize tracing
    cascade_http::init_tracing(&config.log_level);

    tracing::info!(
        service = %config.service_name,
        port = config.port,
        storage_api_url = %config.storage_api_url,
        notifier = config.notifier_url.is_some(),
        "Starting application tier"
    );

    // One shared HTTP client for the relay, the recorder and the notifier
    let client = cascade_http::relay::build_client()?;
    let relay = Relay::new(client.clone(), &config.storage_api_url, "storage");
    let recorder = EventRecorder::new(client.clone(), &config.storage_api_url);
    let notifier = Notifier::new(client, config.notifier_url.as_deref());

    // Build application state
    let state = AppState::new(relay, notifier, recorder, &config.service_name);

    // Build router with middleware
    let app = cascade_backend::routes::build_router(state)
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
