//! Note endpoints, relayed to the storage tier.
//!
//! After a successful mutation the notifier side-channel is fired; its
//! outcome never gates the response already produced by the relay.

use axum::{
    Router,
    extract::{Path, State},
    http::Method,
    routing::get,
};

use cascade_core::Note;
use cascade_http::{ApiError, ApiResult, Inbound, RelayedResponse, error::method_not_allowed};

use super::parse_id;
use crate::notifier::NoteAction;
use crate::state::AppState;

/// GET/POST /api/notes - Relay the note collection.
///
/// A successful POST fires a "created" notification carrying the stored
/// note's id and title, read back from the relayed response body.
async fn notes_collection(
    State(state): State<AppState>,
    inbound: Inbound,
) -> ApiResult<RelayedResponse> {
    let is_create = inbound.method == Method::POST;

    let relayed = state.relay().forward(inbound, "/notes").await?;

    if is_create && relayed.status.is_success() {
        match serde_json::from_slice::<Note>(&relayed.body) {
            Ok(note) => {
                state
                    .notifier()
                    .dispatch(NoteAction::Created, note.id, Some(note.title));
            }
            Err(error) => {
                tracing::debug!(error = %error, "could not read created note from relay body");
                state.notifier().dispatch(NoteAction::Created, 0, None);
            }
        }
    }

    Ok(relayed)
}

/// GET/PUT/DELETE /api/notes/{id} - Relay one note.
///
/// The id segment is validated here so garbage never reaches the storage
/// tier. Successful PUT/DELETE fire "updated"/"deleted" notifications.
async fn note_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    inbound: Inbound,
) -> ApiResult<RelayedResponse> {
    let id = parse_id(&id).ok_or_else(|| ApiError::BadRequest("invalid note id".to_string()))?;
    let method = inbound.method.clone();

    let relayed = state
        .relay()
        .forward(inbound, &format!("/notes/{}", id))
        .await?;

    if relayed.status.is_success() {
        if method == Method::PUT {
            state.notifier().dispatch(NoteAction::Updated, id, None);
        } else if method == Method::DELETE {
            state.notifier().dispatch(NoteAction::Deleted, id, None);
        }
    }

    Ok(relayed)
}

/// GET /api/notes/export.md - Relay the markdown export.
async fn export_notes(State(state): State<AppState>) -> ApiResult<RelayedResponse> {
    Ok(state.relay().get("/notes/export.md").await?)
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
