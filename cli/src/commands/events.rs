//! EVENTS command - List recorded events.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the events command.
#[derive(Args)]
pub struct EventsArgs {}

/// One recorded event.
#[derive(Debug, Deserialize, Serialize)]
pub struct Event {
    pub id: i64,
    pub source: String,
    pub method: String,
    pub route: String,
    pub status: i32,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Response from GET /events.
#[derive(Debug, Deserialize, Serialize)]
pub struct EventListResponse {
    pub count: usize,
    pub events: Vec<Event>,
}

impl HumanReadable for EventListResponse {
    fn print_human(&self) {
        if self.events.is_empty() {
            println!("{}", "No events recorded.".dimmed());
            return;
        }

        println!("{} event(s)", self.count);
        println!();
        for event in &self.events {
            let status = if event.status < 400 {
                event.status.to_string().green()
            } else {
                event.status.to_string().red()
            };
            println!(
                "  #{} [{}] {} {} {} ({}, {})",
                event.id,
                status,
                event.method.bold(),
                event.route,
                event.message,
                event.source.cyan(),
                format_timestamp(&event.created_at)
            );
        }
    }
}

/// Execute the events command.
pub async fn execute(
    client: &Client,
    base_url: &str,
    human: bool,
    _args: EventsArgs,
) -> Result<()> {
    let response: EventListResponse =
        make_request(client.get(format!("{}/events", base_url))).await?;

    output(&response, human)
}
