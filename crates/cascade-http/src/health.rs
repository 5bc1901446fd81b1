//! Shared health check response shape.

use serde::{Deserialize, Serialize};

/// Liveness response returned by every tier's /healthz.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, always "ok" when the handler runs at all.
    pub status: String,
    /// Configured service name of the responding tier.
    pub service: String,
}

impl HealthResponse {
    /// Build the canonical "ok" response for a tier.
    pub fn ok(service: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
        }
    }
}
