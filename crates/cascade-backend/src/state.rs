//! Application state shared across handlers.

use std::sync::Arc;

use cascade_http::Relay;

use crate::notifier::Notifier;
use crate::recorder::EventRecorder;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Relay towards the storage tier.
    relay: Relay,
    /// Best-effort note lifecycle notifier.
    notifier: Notifier,
    /// Direct event recording against the storage tier.
    recorder: EventRecorder,
    /// Configured service name.
    service: Arc<str>,
}

impl AppState {
    /// Create new application state.
    pub fn new(relay: Relay, notifier: Notifier, recorder: EventRecorder, service: &str) -> Self {
        Self {
            relay,
            notifier,
            recorder,
            service: Arc::from(service),
        }
    }

    /// Get the relay towards the storage tier.
    pub fn relay(&self) -> &Relay {
        &self.relay
    }

    /// Get the note lifecycle notifier.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Get the event recorder.
    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
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
