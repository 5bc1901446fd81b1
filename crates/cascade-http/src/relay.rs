//! Relay client: forward one inbound request to a fixed downstream tier and
//! mirror its response back verbatim.
//!
//! The relay is a content-and-status forwarder, not a reverse proxy. It
//! forwards the method, the fully buffered body and the `Content-Type`
//! request header; it relays back the downstream status (4xx/5xx included),
//! body bytes, `Content-Type` and `Content-Disposition`. Everything else is
//! dropped. Path mapping and method allow-lists belong to the caller.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::ApiError;

/// Client-side timeout for all outbound tier-to-tier calls.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Cap on buffered inbound bodies.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the shared HTTP client used for relaying and side-channel calls.
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(UPSTREAM_TIMEOUT).build()
}

/// Errors raised while talking to the downstream tier.
///
/// A downstream response with an error status is NOT an error here - it is
/// relayed verbatim. These variants only cover failing to reach the
/// downstream or failing to read one of the two bodies.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The downstream service could not be reached (connect, timeout, ...).
    #[error("{upstream} unavailable")]
    Unreachable {
        upstream: Arc<str>,
        #[source]
        source: reqwest::Error,
    },

    /// The downstream response body could not be read.
    #[error("failed reading {upstream} response")]
    Read {
        upstream: Arc<str>,
        #[source]
        source: reqwest::Error,
    },
}

/// The parts of an inbound request the relay forwards.
///
/// Extracting this buffers the body in full; a body read failure rejects
/// with a JSON 400 before any downstream call is made.
pub struct Inbound {
    pub method: Method,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl<S> FromRequest<S> for Inbound
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();
        let content_type = parts.headers.get(header::CONTENT_TYPE).cloned();

        let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|_| ApiError::BadRequest("failed to read request body".to_string()))?;

        Ok(Self {
            method: parts.method,
            content_type,
            body,
        })
    }
}

/// A downstream response, reduced to the parts the relay mirrors.
#[derive(Debug)]
pub struct RelayedResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub content_disposition: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for RelayedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        if let Some(content_type) = self.content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type);
        }
        if let Some(content_disposition) = self.content_disposition {
            response
                .headers_mut()
                .insert(header::CONTENT_DISPOSITION, content_disposition);
        }
        response
    }
}

/// Forwarder bound to one downstream base URL.
///
/// Holds no mutable state beyond the shared HTTP client, so it is cheap to
/// clone and safe to reuse across concurrent handlers.
#[derive(Debug, Clone)]
pub struct Relay {
    client: reqwest::Client,
    base_url: Arc<str>,
    upstream: Arc<str>,
}

impl Relay {
    /// Create a relay towards `base_url`. `upstream` names the downstream
    /// tier in error messages ("backend unavailable", ...).
    pub fn new(client: reqwest::Client, base_url: &str, upstream: &str) -> Self {
        Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            upstream: Arc::from(upstream),
        }
    }

    /// The downstream base URL this relay targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward an inbound request to the mapped downstream `path`.
    pub async fn forward(
        &self,
        inbound: Inbound,
        path: &str,
    ) -> Result<RelayedResponse, RelayError> {
        self.send(inbound.method, path, inbound.content_type, inbound.body)
            .await
    }

    /// Issue a bodyless GET to the mapped downstream `path`.
    pub async fn get(&self, path: &str) -> Result<RelayedResponse, RelayError> {
        self.send(Method::GET, path, None, Bytes::new()).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        content_type: Option<HeaderValue>,
        body: Bytes,
    ) -> Result<RelayedResponse, RelayError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.request(method, &url);
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }

        let response = request.body(body).send().await.map_err(|source| {
            tracing::warn!(upstream = %self.upstream, error = %source, "upstream request failed");
            RelayError::Unreachable {
                upstream: self.upstream.clone(),
                source,
            }
        })?;

        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let content_disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .cloned();

        let body = response.bytes().await.map_err(|source| {
            tracing::warn!(upstream = %self.upstream, error = %source, "failed reading upstream response");
            RelayError::Read {
                upstream: self.upstream.clone(),
                source,
            }
        })?;

        Ok(RelayedResponse {
            status,
            content_type,
            content_disposition,
            body,
        })
    }
}
