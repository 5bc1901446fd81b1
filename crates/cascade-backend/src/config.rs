//! Application tier configuration from environment variables.

use std::env;

/// Application tier configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Port to listen on.
    pub port: u16,
    /// Base URL of the storage tier.
    pub storage_api_url: String,
    /// Base URL of the notifier service; None disables the side-channel.
    pub notifier_url: Option<String>,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Service name used in health responses, log lines and recorded events.
    pub service_name: String,
}

impl BackendConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `BACKEND_PORT`: listen port (default: 8081)
    /// - `STORAGE_API_URL`: storage tier base URL (default: "http://localhost:8082")
    /// - `NOTIFIER_URL`: notifier base URL (default: unset, side-channel off)
    /// - `LOG_LEVEL`: logging level (default: "info")
    /// - `SERVICE_NAME`: service name (default: "backend")
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port("BACKEND_PORT", 8081)?;

        let storage_api_url = env::var("STORAGE_API_URL")
            .unwrap_or_else(|_| "http://localhost:8082".to_string())
            .trim_end_matches('/')
            .to_string();

        let notifier_url = env::var("NOTIFIER_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let service_name = env::var("SERVICE_NAME").unwrap_or_else(|_| "backend".to_string());

        Ok(Self {
            port,
            storage_api_url,
            notifier_url,
            log_level,
            service_name,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_port(name: &str, default: u16) -> Result<u16, ConfigError> {
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
