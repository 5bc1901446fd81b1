//! Storage tier configuration from environment variables.
//!
//! Built once in `main` and passed into the components; nothing else reads
//! the process environment.

use std::env;

/// Storage tier configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Service name used in health responses and log lines.
    pub service_name: String,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `STORAGE_PORT`: listen port (default: 8082)
    /// - `LOG_LEVEL`: logging level (default: "info")
    /// - `SERVICE_NAME`: service name (default: "storage")
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port("STORAGE_PORT", 8082)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let service_name = env::var("SERVICE_NAME").unwrap_or_else(|_| "storage".to_string());

        Ok(Self {
            port,
            log_level,
            service_name,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

pub(crate) fn parse_port(name: &str, default: u16) -> Result<u16, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            reason: format!("'{}' is not a valid port", raw),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
