//! Request logging middleware.
//!
//! Emits one structured log line per request with the service name, method,
//! path, response status, elapsed milliseconds and remote address. Purely
//! observational: the response passes through untouched.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};

/// The tier's configured service name, carried as middleware state.
#[derive(Debug, Clone)]
pub struct ServiceName(Arc<str>);

impl ServiceName {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Middleware logging every request.
///
/// Mount with
/// `axum::middleware::from_fn_with_state(ServiceName::new(...), log_requests)`.
/// The remote address is read from [`ConnectInfo`] when the router was served
/// with connect info; otherwise "-" is logged.
pub async fn log_requests(
    State(service): State<ServiceName>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string());

    let start = Instant::now();
    let response = next.run(request).await;

    tracing::info!(
        service = %service.as_str(),
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        remote_addr = %remote_addr.as_deref().unwrap_or("-"),
        "http request"
    );

    response
}
