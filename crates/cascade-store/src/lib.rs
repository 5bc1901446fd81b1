//! cascade-store: Embedded storage layer for the cascade demo stack
//!
//! This crate provides:
//! - SQLite-backed persistence for events and notes
//! - Idempotent schema creation at connect time
//! - Type-safe database operations via sqlx
//!
//! Id allocation rides on SQLite's rowid mechanism: inserting without an
//! explicit id assigns `max(existing id) + 1` (1 for an empty table)
//! atomically, so concurrent creates cannot race a read-then-insert.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cascade_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let event = store.insert_event(&new_event).await?;
//! let events = store.list_events(50).await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{EventRow, NoteRow};
pub use store::{Store, StoreConfig};

// Re-export cascade-core for downstream crates
pub use cascade_core;
