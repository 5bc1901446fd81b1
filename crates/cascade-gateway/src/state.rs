//! Application state shared across handlers.

use std::sync::Arc;

use cascade_http::Relay;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Relay towards the application tier.
    relay: Relay,
    /// Configured service name.
    service: Arc<str>,
}

impl AppState {
    /// Create new application state.
    pub fn new(relay: Relay, service: &str) -> Self {
        Self {
            relay,
            service: Arc::from(service),
        }
    }

    /// Get the relay towards the application tier.
    pub fn relay(&self) -> &Relay {
        &self.relay
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
