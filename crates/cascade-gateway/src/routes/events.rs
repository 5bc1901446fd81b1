//! Demo probes and the event listing, all relayed to the application tier.
//!
//! The gateway rewrites its public paths to the backend's /api paths; the
//! backend response comes back verbatim.

use axum::{Router, extract::State, routing::get};

use cascade_http::{ApiResult, RelayedResponse, error::method_not_allowed};

use crate::state::AppState;

/// GET /ping - Relay to the backend's success probe.
async fn ping(State(state): State<AppState>) -> ApiResult<RelayedResponse> {
    Ok(state.relay().get("/api/ok").await?)
}

/// GET /error - Relay to the backend's failure probe.
async fn error(State(state): State<AppState>) -> ApiResult<RelayedResponse> {
    Ok(state.relay().get("/api/error").await?)
}

/// GET /events - Relay the event listing.
async fn events(State(state): State<AppState>) -> ApiResult<RelayedResponse> {
    Ok(state.relay().get("/api/events").await?)
}

/// Build probe and event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping).fallback(method_not_allowed))
        .route("/error", get(error).fallback(method_not_allowed))
        .route("/events", get(events).fallback(method_not_allowed))
}
