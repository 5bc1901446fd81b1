//! Direct event recording against the storage tier.
//!
//! Used by the demo endpoints to persist their own audit events. Unlike the
//! notifier this is NOT best-effort: a failure here surfaces to the caller
//! as an upstream error.

use std::sync::Arc;

use thiserror::Error;

use cascade_core::NewEvent;

/// Errors raised while recording an event.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The storage tier could not be reached or read.
    #[error("storage unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    /// The storage tier answered with a non-success status.
    #[error("storage rejected event: status {0}")]
    Rejected(reqwest::StatusCode),
}

/// Client posting events to the storage tier's POST /events.
#[derive(Debug, Clone)]
pub struct EventRecorder {
    client: reqwest::Client,
    events_url: Arc<str>,
}

impl EventRecorder {
    pub fn new(client: reqwest::Client, storage_base_url: &str) -> Self {
        let events_url = format!("{}/events", storage_base_url.trim_end_matches('/'));
        Self {
            client,
            events_url: Arc::from(events_url.as_str()),
        }
    }

    /// Record one event. Any non-2xx reply counts as a failure.
    pub async fn record(&self, event: &NewEvent) -> Result<(), RecordError> {
        let response = self
            .client
            .post(self.events_url.as_ref())
            .json(event)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecordError::Rejected(status));
        }

        Ok(())
    }
}
