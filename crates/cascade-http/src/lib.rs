//! cascade-http: Shared HTTP plumbing for the cascade tiers
//!
//! This crate provides:
//! - The relay client that forwards an inbound request to a fixed
//!   downstream tier and mirrors its response
//! - JSON error responses (`{"error": "<message>"}`) via [`ApiError`]
//! - Request logging and request-id middleware
//! - Graceful shutdown with a bounded grace period
//!
//! Every tier binary composes these around its own router; the relay never
//! enforces method allow-lists or rewrites paths itself - that is the
//! caller-facing router's job.

pub mod error;
pub mod health;
pub mod middleware;
pub mod relay;
pub mod shutdown;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use health::HealthResponse;
pub use relay::{Inbound, Relay, RelayError, RelayedResponse};
pub use shutdown::{SHUTDOWN_GRACE, serve, shutdown_signal};

/// Initialize the tracing subscriber for a tier binary.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
