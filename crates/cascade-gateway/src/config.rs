//! Gateway configuration from environment variables.

use std::env;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Port to listen on.
    pub port: u16,
    /// Base URL of the application tier.
    pub backend_url: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Service name used in health responses and log lines.
    pub service_name: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `GATEWAY_PORT`: listen port (default: 8080)
    /// - `BACKEND_URL`: application tier base URL (default: "http://localhost:8081")
    /// - `LOG_LEVEL`: logging level (default: "info")
    /// - `SERVICE_NAME`: service name (default: "gateway")
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port("GATEWAY_PORT", 8080)?;

        let backend_url = env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8081".to_string())
            .trim_end_matches('/')
            .to_string();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let service_name = env::var("SERVICE_NAME").unwrap_or_else(|_| "gateway".to_string());

        Ok(Self {
            port,
            backend_url,
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
