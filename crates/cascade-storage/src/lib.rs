//! cascade-storage: the storage tier of the cascade demo stack.
//!
//! Owns the persistent state (events and notes) and exposes CRUD plus the
//! notes document export over HTTP. Upstream tiers reach it only through
//! the relay; it never calls out to anything itself.

pub mod config;
pub mod routes;
pub mod state;

pub use config::{ConfigError, StorageConfig};
pub use state::AppState;
