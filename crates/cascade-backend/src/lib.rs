//! cascade-backend: the application tier of the cascade demo stack.
//!
//! Sits between the gateway and the storage tier. Relays note and event
//! requests downstream, records its own audit events for the demo
//! endpoints, and fires the best-effort notifier side-channel after note
//! mutations.

pub mod config;
pub mod notifier;
pub mod recorder;
pub mod routes;
pub mod state;

pub use config::{BackendConfig, ConfigError};
pub use notifier::{NoteAction, Notifier};
pub use recorder::EventRecorder;
pub use state::AppState;
