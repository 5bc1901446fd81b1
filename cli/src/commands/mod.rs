//! Shared helpers for CLI commands.

pub mod events;
pub mod notes;
pub mod ping;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Types that can print themselves for --human output.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Error body produced by every tier.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Build the HTTP client shared by all commands.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .context("failed to build HTTP client")
}

/// Send a request and decode a JSON response, turning server error bodies
/// into readable messages.
pub async fn make_request<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await.context("request failed")?;
    let status = response.status();
    let body = response
        .text()
        .await
        .context("failed to read response body")?;

    if !status.is_success() {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&body) {
            bail!("server returned {}: {}", status, parsed.error);
        }
        bail!("server returned {}: {}", status, body.trim());
    }

    serde_json::from_str(&body)
        .with_context(|| format!("unexpected response body: {}", body.trim()))
}

/// Print a value as pretty JSON or hand it to its human formatter.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Format a timestamp for human output.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
