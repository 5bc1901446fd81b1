//! Demo endpoints that record an audit event before answering.
//!
//! `/api/ok` simulates a successful request, `/api/error` a failing one.
//! Recording the event in the storage tier is part of the primary
//! operation: if it fails, the caller gets a 502 instead of the canned
//! response.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use cascade_core::NewEvent;
use cascade_http::{ApiError, ApiResult, error::method_not_allowed};

use crate::state::AppState;

/// Response for GET /api/ok.
#[derive(Debug, Serialize)]
struct OkResponse {
    result: String,
    service: String,
}

/// Response for GET /api/error.
#[derive(Debug, Serialize)]
struct SimulatedErrorResponse {
    error: String,
    service: String,
}

/// GET /api/ok - Record a success event, then answer ok.
async fn demo_ok(State(state): State<AppState>) -> ApiResult<Json<OkResponse>> {
    record(&state, "/api/ok", 200, "successful request").await?;

    Ok(Json(OkResponse {
        result: "ok".to_string(),
        service: state.service().to_string(),
    }))
}

/// GET /api/error - Record a failure event, then answer with a canned 404.
async fn demo_error(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<SimulatedErrorResponse>)> {
    record(&state, "/api/error", 404, "simulated error response").await?;

    Ok((
        StatusCode::NOT_FOUND,
        Json(SimulatedErrorResponse {
            error: "simulated error".to_string(),
            service: state.service().to_string(),
        }),
    ))
}

async fn record(state: &AppState, route: &str, status: i32, message: &str) -> ApiResult<()> {
    let event = NewEvent {
        source: state.service().to_string(),
        method: "GET".to_string(),
        route: route.to_string(),
        status,
        message: message.to_string(),
    };

    state.recorder().record(&event).await.map_err(|error| {
        tracing::warn!(error = %error, route, "failed to store event");
        ApiError::Upstream("failed to store event".to_string())
    })
}

/// Build demo routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/ok", get(demo_ok).fallback(method_not_allowed))
        .route("/api/error", get(demo_error).fallback(method_not_allowed))
}
