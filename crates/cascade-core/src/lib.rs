//! cascade-core: Domain types for the cascade demo stack
//!
//! This crate provides:
//! - The two persisted resource kinds (events and notes) with their JSON
//!   field-name contract
//! - Create/update payloads and the server-side defaulting rules
//! - The notes-to-markdown document renderer used by the export endpoint
//!
//! The crate is deliberately free of HTTP and database dependencies so that
//! every tier (and the CLI) can share these types.

pub mod export;
pub mod types;

pub use export::{EXPORT_FILENAME, render_notes_document};
pub use types::{
    CreateEventRequest, Event, EventListResponse, NewEvent, NewNote, Note, NoteListResponse,
    NotePayload, UNTITLED_NOTE,
};
