//! Note endpoints: list, create, read, update, delete, and the markdown
//! document export.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;

use cascade_core::{
    EXPORT_FILENAME, NewNote, Note, NoteListResponse, NotePayload, render_notes_document,
};
use cascade_http::{ApiError, ApiResult, error::method_not_allowed};

use super::parse_id;
use crate::state::AppState;

/// GET /notes - List all notes, most recent id first.
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<NoteListResponse>> {
    let rows = state.store().list_notes().await?;
    let notes: Vec<Note> = rows.into_iter().map(Note::from).collect();

    Ok(Json(NoteListResponse {
        count: notes.len(),
        notes,
    }))
}

/// POST /notes - Create a note from `{title, content}`.
///
/// A blank title becomes "Untitled Note"; content may be empty.
async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let Json(payload) =
        payload.map_err(|_| ApiError::BadRequest("invalid JSON payload".to_string()))?;

    let row = state.store().insert_note(&NewNote::from(payload)).await?;

    tracing::info!(note_id = row.id, title = %row.title, "Note created");

    Ok((StatusCode::CREATED, Json(Note::from(row))))
}

/// GET /notes/{id} - Read one note.
async fn get_note(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Note>> {
    let id = parse_id(&id).ok_or_else(|| ApiError::BadRequest("invalid note id".to_string()))?;

    let row = state.store().get_note(id).await?;
    Ok(Json(Note::from(row)))
}

/// PUT /notes/{id} - Overwrite title and content, refresh updatedAt.
///
/// The UPDATE is a no-op for an absent id; the follow-up read reports 404.
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> ApiResult<Json<Note>> {
    let id = parse_id(&id).ok_or_else(|| ApiError::BadRequest("invalid note id".to_string()))?;
    let Json(payload) =
        payload.map_err(|_| ApiError::BadRequest("invalid JSON payload".to_string()))?;

    let row = state.store().update_note(id, &NewNote::from(payload)).await?;

    tracing::info!(note_id = row.id, "Note updated");

    Ok(Json(Note::from(row)))
}

/// DELETE /notes/{id} - Remove one note. Idempotent.
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id).ok_or_else(|| ApiError::BadRequest("invalid note id".to_string()))?;

    state.store().delete_note(id).await?;

    tracing::info!(note_id = id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /notes/export.md - All notes as one downloadable markdown document.
async fn export_notes(State(state): State<AppState>) -> ApiResult<Response> {
    let rows = state.store().list_notes_oldest_first().await?;
    let notes: Vec<Note> = rows.into_iter().map(Note::from).collect();

    let document = render_notes_document(&notes, Utc::now());

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/markdown; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        document,
    )
        .into_response())
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notes",
            get(list_notes)
                .post(create_note)
                .fallback(method_not_allowed),
        )
        .route(
            "/notes/export.md",
            get(export_notes).fallback(method_not_allowed),
        )
        .route(
            "/notes/{id}",
            get(get_note)
                .put(update_note)
                .delete(delete_note)
                .fallback(method_not_allowed),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::routes::testing::router_with_temp_store;

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn parse_timestamp(value: &serde_json::Value) -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::parse_from_rfc3339(value.as_str().unwrap())
            .unwrap()
            .with_timezone(&chrono::Utc)
    }

    #[tokio::test]
    async fn create_normalizes_blank_title_only() {
        let (router, _dir) = router_with_temp_store().await;

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/notes",
                r#"{"title":"","content":""}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let note = body_json(response).await;
        assert_eq!(note["title"], "Untitled Note");
        assert_eq!(note["content"], "");
        assert_eq!(note["createdAt"], note["updatedAt"]);
    }

    #[tokio::test]
    async fn note_lifecycle_create_update_delete() {
        let (router, _dir) = router_with_temp_store().await;

        let created = body_json(
            router
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/notes",
                    r#"{"title":"A","content":"B"}"#,
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["title"], "A");
        assert_eq!(created["content"], "B");

        let updated = body_json(
            router
                .clone()
                .oneshot(json_request(
                    "PUT",
                    "/notes/1",
                    r#"{"title":"","content":"C"}"#,
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(updated["id"], 1);
        assert_eq!(updated["title"], "Untitled Note");
        assert_eq!(updated["content"], "C");
        assert_eq!(updated["createdAt"], created["createdAt"]);
        let created_at = parse_timestamp(&created["updatedAt"]);
        let updated_at = parse_timestamp(&updated["updatedAt"]);
        assert!(updated_at > created_at);

        let response = router
            .clone()
            .oneshot(Request::delete("/notes/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router
            .oneshot(Request::get("/notes/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_of_absent_note_is_not_found() {
        let (router, _dir) = router_with_temp_store().await;

        let response = router
            .oneshot(json_request(
                "PUT",
                "/notes/9",
                r#"{"title":"A","content":"B"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "note not found: 9");
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (router, _dir) = router_with_temp_store().await;

        for body in [r#"{"title":"first"}"#, r#"{"title":"second"}"#] {
            router
                .clone()
                .oneshot(json_request("POST", "/notes", body))
                .await
                .unwrap();
        }

        let listing = body_json(
            router
                .oneshot(Request::get("/notes").body(Body::empty()).unwrap())
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(listing["count"], 2);
        assert_eq!(listing["notes"][0]["title"], "second");
        assert_eq!(listing["notes"][1]["title"], "first");
    }

    #[tokio::test]
    async fn export_of_empty_set_renders_placeholder() {
        let (router, _dir) = router_with_temp_store().await;

        let response = router
            .oneshot(
                Request::get("/notes/export.md")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/markdown; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"workshop-notes.md\""
        );

        let document = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(document.contains("No notes yet."));
        assert!(!document.contains("##"));
    }

    #[tokio::test]
    async fn export_is_oldest_first_with_empty_note_placeholder() {
        let (router, _dir) = router_with_temp_store().await;

        for body in [
            r#"{"title":"Old","content":"   "}"#,
            r#"{"title":"New","content":"body"}"#,
        ] {
            router
                .clone()
                .oneshot(json_request("POST", "/notes", body))
                .await
                .unwrap();
        }

        let response = router
            .oneshot(
                Request::get("/notes/export.md")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let document = String::from_utf8(body_bytes(response).await).unwrap();

        let old = document.find("## Old").unwrap();
        let new = document.find("## New").unwrap();
        assert!(old < new);
        assert!(document.contains("(empty note)"));
    }

    #[tokio::test]
    async fn post_to_note_item_gets_json_405() {
        let (router, _dir) = router_with_temp_store().await;

        let response = router
            .oneshot(json_request("POST", "/notes/1", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["error"], "method not allowed");
    }
}
