//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx queries.
//! They are separate from the wire types in cascade-core so the storage
//! schema can evolve without touching the JSON contract.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use cascade_core::{Event, Note};

/// Database row for the `events` table.
#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub source: String,
    pub method: String,
    pub route: String,
    pub status: i32,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id,
            source: row.source,
            method: row.method,
            route: row.route,
            status: row.status,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
