//! Event endpoints: list, create, read, delete.
//!
//! Events are immutable audit records; there is no update path.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use cascade_core::{CreateEventRequest, Event, EventListResponse, NewEvent};
use cascade_http::{ApiError, ApiResult, error::method_not_allowed};

use super::parse_id;
use crate::state::AppState;

/// Default number of events returned by a list without `?limit`.
const DEFAULT_LIMIT: i64 = 50;
/// Upper bound accepted for `?limit`.
const MAX_LIMIT: i64 = 500;

#[derive(Debug, Deserialize)]
struct ListEventsParams {
    limit: Option<String>,
}

/// GET /events - List events, most recent id first.
///
/// `?limit=N` must be within 1..=500; anything else is a client error.
async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> ApiResult<Json<EventListResponse>> {
    let limit = parse_limit(params.limit.as_deref())?;

    let rows = state.store().list_events(limit).await?;
    let events: Vec<Event> = rows.into_iter().map(Event::from).collect();

    Ok(Json(EventListResponse {
        count: events.len(),
        events,
    }))
}

/// POST /events - Create an event from a JSON body.
///
/// Empty or zero fields are filled with the documented defaults before
/// insertion; returns the stored event with its assigned id.
async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let Json(request) =
        payload.map_err(|_| ApiError::BadRequest("invalid JSON payload".to_string()))?;

    let row = state.store().insert_event(&NewEvent::from(request)).await?;

    tracing::info!(event_id = row.id, source = %row.source, "Event created");

    Ok((StatusCode::CREATED, Json(Event::from(row))))
}

/// GET /events/{id} - Read one event.
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Event>> {
    let id = parse_id(&id).ok_or_else(|| ApiError::BadRequest("invalid event id".to_string()))?;

    let row = state.store().get_event(id).await?;
    Ok(Json(Event::from(row)))
}

/// DELETE /events/{id} - Remove one event. Idempotent.
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id).ok_or_else(|| ApiError::BadRequest("invalid event id".to_string()))?;

    state.store().delete_event(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Build event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events",
            get(list_events)
                .post(create_event)
                .fallback(method_not_allowed),
        )
        .route(
            "/events/{id}",
            get(get_event)
                .delete(delete_event)
                .fallback(method_not_allowed),
        )
}

fn parse_limit(raw: Option<&str>) -> Result<i64, ApiError> {
    match raw {
        None | Some("") => Ok(DEFAULT_LIMIT),
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .filter(|limit| (1..=MAX_LIMIT).contains(limit))
            .ok_or_else(|| {
                ApiError::BadRequest("limit must be between 1 and 500".to_string())
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::ServiceExt;

    use crate::routes::testing::router_with_temp_store;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn limit_bounds() {
        assert_eq!(parse_limit(None).unwrap(), 50);
        assert_eq!(parse_limit(Some("")).unwrap(), 50);
        assert_eq!(parse_limit(Some("1")).unwrap(), 1);
        assert_eq!(parse_limit(Some("500")).unwrap(), 500);
        assert!(parse_limit(Some("0")).is_err());
        assert!(parse_limit(Some("501")).is_err());
        assert!(parse_limit(Some("abc")).is_err());
    }

    #[tokio::test]
    async fn create_applies_defaults_and_assigns_id() {
        let (router, _dir) = router_with_temp_store().await;

        let response = router
            .oneshot(post_json("/events", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let event = body_json(response).await;
        assert_eq!(event["id"], 1);
        assert_eq!(event["source"], "unknown");
        assert_eq!(event["method"], "GET");
        assert_eq!(event["route"], "/");
        assert_eq!(event["status"], 200);
        assert_eq!(event["message"], "request completed");
        assert!(event["createdAt"].is_string());
    }

    #[tokio::test]
    async fn malformed_json_is_a_client_error() {
        let (router, _dir) = router_with_temp_store().await;

        let response = router
            .oneshot(post_json("/events", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "invalid JSON payload");
    }

    #[tokio::test]
    async fn list_rejects_out_of_range_limits() {
        let (router, _dir) = router_with_temp_store().await;

        for uri in ["/events?limit=0", "/events?limit=501", "/events?limit=abc"] {
            let response = router
                .clone()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(
                body_json(response).await["error"],
                "limit must be between 1 and 500"
            );
        }

        let response = router
            .oneshot(
                Request::get("/events?limit=500")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn list_is_newest_first_with_count() {
        let (router, _dir) = router_with_temp_store().await;

        for body in [r#"{"message":"a"}"#, r#"{"message":"b"}"#] {
            router
                .clone()
                .oneshot(post_json("/events", body))
                .await
                .unwrap();
        }

        let response = router
            .oneshot(Request::get("/events").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let listing = body_json(response).await;
        assert_eq!(listing["count"], 2);
        assert_eq!(listing["events"][0]["id"], 2);
        assert_eq!(listing["events"][1]["id"], 1);
    }

    #[tokio::test]
    async fn get_round_trips_created_event() {
        let (router, _dir) = router_with_temp_store().await;

        let created = body_json(
            router
                .clone()
                .oneshot(post_json(
                    "/events",
                    r#"{"source":"backend","status":404,"message":"simulated error response"}"#,
                ))
                .await
                .unwrap(),
        )
        .await;

        let response = router
            .oneshot(Request::get("/events/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn invalid_id_segment_is_a_client_error() {
        let (router, _dir) = router_with_temp_store().await;

        let response = router
            .oneshot(Request::get("/events/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "invalid event id");
    }

    #[tokio::test]
    async fn delete_is_idempotent_over_http() {
        let (router, _dir) = router_with_temp_store().await;

        router
            .clone()
            .oneshot(post_json("/events", "{}"))
            .await
            .unwrap();

        for _ in 0..2 {
            let response = router
                .clone()
                .oneshot(
                    Request::delete("/events/1")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }

        let response = router
            .oneshot(Request::get("/events/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn disallowed_method_gets_json_405() {
        let (router, _dir) = router_with_temp_store().await;

        let response = router
            .oneshot(Request::put("/events").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["error"], "method not allowed");
    }
}
