//! cascade-gateway: the edge tier of the cascade demo stack.
//!
//! Serves the embedded demo page and relays everything else to the
//! application tier, mirroring downstream responses verbatim.

pub mod config;
pub mod routes;
pub mod state;

pub use config::{ConfigError, GatewayConfig};
pub use state::AppState;
