//! Event listing, relayed to the storage tier.

use axum::{Router, extract::State, routing::get};

use cascade_http::{ApiResult, RelayedResponse, error::method_not_allowed};

use crate::state::AppState;

/// GET /api/events - Relay the event listing from the storage tier.
async fn list_events(State(state): State<AppState>) -> ApiResult<RelayedResponse> {
    Ok(state.relay().get("/events?limit=100").await?)
}

/// Build event routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/events", get(list_events).fallback(method_not_allowed))
}
