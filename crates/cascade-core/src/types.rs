//! Resource types and the defaulting rules applied on create.
//!
//! Field names follow the wire contract: `createdAt`/`updatedAt` in JSON,
//! snake_case in Rust. Timestamps are always generated server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title substituted when a note is created or updated with a
/// blank or whitespace-only title.
pub const UNTITLED_NOTE: &str = "Untitled Note";

/// An immutable audit record describing one handled request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub source: String,
    pub method: String,
    pub route: String,
    pub status: i32,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A mutable document. Updates overwrite title and content in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Response for listing events.
#[derive(Debug, Serialize, Deserialize)]
pub struct EventListResponse {
    pub count: usize,
    pub events: Vec<Event>,
}

/// Response for listing notes.
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteListResponse {
    pub count: usize,
    pub notes: Vec<Note>,
}

/// Request body for creating an event. Every field is optional on the wire;
/// missing or zero values are filled in by [`NewEvent::from`].
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CreateEventRequest {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub message: String,
}

/// A fully-defaulted event ready for insertion.
///
/// Serializes with the same field names the storage tier accepts, so the
/// application tier can POST it directly when recording its own events.
#[derive(Debug, Clone, Serialize)]
pub struct NewEvent {
    pub source: String,
    pub method: String,
    pub route: String,
    pub status: i32,
    pub message: String,
}

impl From<CreateEventRequest> for NewEvent {
    fn from(request: CreateEventRequest) -> Self {
        Self {
            source: non_empty_or(request.source, "unknown"),
            method: non_empty_or(request.method, "GET"),
            route: non_empty_or(request.route, "/"),
            status: if request.status == 0 {
                200
            } else {
                request.status
            },
            message: non_empty_or(request.message, "request completed"),
        }
    }
}

/// Request body for creating or updating a note.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NotePayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// A normalized note payload ready for insertion or overwrite.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

impl From<NotePayload> for NewNote {
    fn from(payload: NotePayload) -> Self {
        let title = if payload.title.trim().is_empty() {
            UNTITLED_NOTE.to_string()
        } else {
            payload.title
        };
        // Content has no default: empty stays empty.
        Self {
            title,
            content: payload.content,
        }
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_defaults_fill_empty_fields() {
        let event = NewEvent::from(CreateEventRequest::default());
        assert_eq!(event.source, "unknown");
        assert_eq!(event.method, "GET");
        assert_eq!(event.route, "/");
        assert_eq!(event.status, 200);
        assert_eq!(event.message, "request completed");
    }

    #[test]
    fn event_defaults_keep_provided_fields() {
        let event = NewEvent::from(CreateEventRequest {
            source: "gateway".to_string(),
            method: "POST".to_string(),
            route: "/api/notes".to_string(),
            status: 404,
            message: "simulated error".to_string(),
        });
        assert_eq!(event.source, "gateway");
        assert_eq!(event.method, "POST");
        assert_eq!(event.route, "/api/notes");
        assert_eq!(event.status, 404);
        assert_eq!(event.message, "simulated error");
    }

    #[test]
    fn create_event_request_tolerates_missing_fields() {
        let request: CreateEventRequest = serde_json::from_str(r#"{"status": 503}"#).unwrap();
        let event = NewEvent::from(request);
        assert_eq!(event.status, 503);
        assert_eq!(event.source, "unknown");
    }

    #[test]
    fn blank_title_becomes_untitled() {
        let note = NewNote::from(NotePayload {
            title: "   ".to_string(),
            content: "body".to_string(),
        });
        assert_eq!(note.title, UNTITLED_NOTE);
        assert_eq!(note.content, "body");
    }

    #[test]
    fn empty_content_is_not_substituted() {
        let note = NewNote::from(NotePayload {
            title: "A".to_string(),
            content: String::new(),
        });
        assert_eq!(note.title, "A");
        assert_eq!(note.content, "");
    }

    #[test]
    fn event_json_uses_camel_case_timestamp() {
        let event = Event {
            id: 1,
            source: "backend".to_string(),
            method: "GET".to_string(),
            route: "/api/ok".to_string(),
            status: 200,
            message: "successful request".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn note_json_round_trips() {
        let note = Note {
            id: 7,
            title: "Title".to_string(),
            content: "Content".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"updatedAt\""));
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }
}
