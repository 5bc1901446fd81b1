//! Entry point for the cascade-gateway binary.

use axum::middleware;
use cascade_gateway::{AppState, GatewayConfig};
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
    let config = GatewayConfig::from_env()?;

    // Initialize tracing
    cascade_http::init_tracing(&config.log_level);

    tracing::info!(
        service = %config.service_name,
        port = config.port,
        backend_url = %config.backend_url,
        "Starting gateway tier"
    );

    // Build the relay towards the application tier
    let client = cascade_http::relay::build_client()?;
    let relay = Relay::new(client, &config.backend_url, "backend");

    // Build application state
    let state = AppState::new(relay, &config.service_name);

    // Build router with middleware
    let app = cascade_gateway::routes::build_router(state)
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
