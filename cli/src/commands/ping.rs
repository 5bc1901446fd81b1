//! PING command - Record a success event through the whole chain.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the ping command.
#[derive(Args)]
pub struct PingArgs {}

/// Response from GET /ping.
#[derive(Debug, Deserialize, Serialize)]
pub struct PingResponse {
    pub result: String,
    pub service: String,
}

impl HumanReadable for PingResponse {
    fn print_human(&self) {
        println!(
            "{} (answered by {})",
            self.result.green().bold(),
            self.service.cyan()
        );
    }
}

/// Execute the ping command.
pub async fn execute(client: &Client, base_url: &str, human: bool, _args: PingArgs) -> Result<()> {
    let response: PingResponse =
        make_request(client.get(format!("{}/ping", base_url))).await?;

    output(&response, human)
}
