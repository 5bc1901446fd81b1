//! Note endpoints, relayed to the application tier.

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};

use cascade_http::{ApiError, ApiResult, Inbound, RelayedResponse, error::method_not_allowed};

use super::parse_id;
use crate::state::AppState;

/// GET/POST /api/notes - Relay the note collection.
async fn notes_collection(
    State(state): State<AppState>,
    inbound: Inbound,
) -> ApiResult<RelayedResponse> {
    Ok(state.relay().forward(inbound, "/api/notes").await?)
}

/// GET/PUT/DELETE /api/notes/{id} - Relay one note.
async fn note_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    inbound: Inbound,
) -> ApiResult<RelayedResponse> {
    let id = parse_id(&id).ok_or_else(|| ApiError::BadRequest("invalid note id".to_string()))?;

    Ok(state
        .relay()
        .forward(inbound, &format!("/api/notes/{}", id))
        .await?)
}

/// GET /api/notes/export.md - Relay the markdown export.
///
/// The downstream Content-Disposition is re-emitted so browser clients get
/// the download filename from the storage tier untouched.
async fn export_notes(State(state): State<AppState>) -> ApiResult<RelayedResponse> {
    Ok(state.relay().get("/api/notes/export.md").await?)
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/notes",
            get(notes_collection)
                .post(notes_collection)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/notes/export.md",
            get(export_notes).fallback(method_not_allowed),
        )
        .route(
            "/api/notes/{id}",
            get(note_item)
                .put(note_item)
                .delete(note_item)
                .fallback(method_not_allowed),
        )
}
