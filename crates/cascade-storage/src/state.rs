//! Application state shared across handlers.

use std::sync::Arc;

use cascade_store::Store;

/// Application state shared across all handlers.
///
/// Cloneable; extracted in handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Database store.
    store: Store,
    /// Configured service name.
    service: Arc<str>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Store, service: &str) -> Self {
        Self {
            store,
            service: Arc::from(service),
        }
    }

    /// Get a reference to the database store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Get the configured service name.
    pub fn service(&self) -> &str {
        &self.service
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}
