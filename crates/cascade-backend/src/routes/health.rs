//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};

use cascade_http::{HealthResponse, error::method_not_allowed};

use crate::state::AppState;

/// GET /healthz - Liveness check. Answered locally, never relayed.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.service()))
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/healthz", get(health_check).fallback(method_not_allowed))
}
