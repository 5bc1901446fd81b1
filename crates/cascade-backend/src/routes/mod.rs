//! Route definitions for the application tier.

pub mod demo;
pub mod events;
pub mod health;
pub mod notes;

use axum::Router;

use cascade_http::error::not_found;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(demo::routes())
        .merge(events::routes())
        .merge(notes::routes())
        .fallback(not_found)
        .with_state(state)
}

/// Parse a positive id from a path segment.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    let id = raw.parse::<i64>().ok()?;
    (id > 0).then_some(id)
}
