//! NOTES commands - List, create, read, update, delete and export notes.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, format_timestamp, make_request, output};

/// Note subcommands.
#[derive(Subcommand)]
pub enum NotesCommand {
    /// List all notes, newest first
    List,

    /// Create a new note
    Create(CreateArgs),

    /// Read one note
    Show(ShowArgs),

    /// Overwrite a note's title and content
    Update(UpdateArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Download all notes as a markdown document
    Export,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Note title (blank becomes "Untitled Note")
    pub title: String,

    /// Note content
    #[arg(long, default_value = "")]
    pub content: String,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Note id
    pub id: i64,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Note id
    pub id: i64,

    /// New title (blank becomes "Untitled Note")
    #[arg(long, default_value = "")]
    pub title: String,

    /// New content
    #[arg(long, default_value = "")]
    pub content: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Note id
    pub id: i64,
}

/// Request body for create and update.
#[derive(Debug, Serialize)]
struct NotePayload<'a> {
    title: &'a str,
    content: &'a str,
}

/// One note as returned by the server.
#[derive(Debug, Deserialize, Serialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl HumanReadable for Note {
    fn print_human(&self) {
        println!("{} {}", format!("#{}", self.id).bold(), self.title.cyan());
        println!(
            "  created {} / updated {}",
            format_timestamp(&self.created_at),
            format_timestamp(&self.updated_at)
        );
        if !self.content.is_empty() {
            println!();
            println!("{}", self.content);
        }
    }
}

/// Response from GET /api/notes.
#[derive(Debug, Deserialize, Serialize)]
pub struct NoteListResponse {
    pub count: usize,
    pub notes: Vec<Note>,
}

impl HumanReadable for NoteListResponse {
    fn print_human(&self) {
        if self.notes.is_empty() {
            println!("{}", "No notes yet.".dimmed());
            return;
        }

        println!("{} note(s)", self.count);
        println!();
        for note in &self.notes {
            println!(
                "  {} {} (updated {})",
                format!("#{}", note.id).bold(),
                note.title.cyan(),
                format_timestamp(&note.updated_at)
            );
        }
    }
}

/// Execute a notes subcommand.
pub async fn execute(
    client: &Client,
    base_url: &str,
    human: bool,
    command: NotesCommand,
) -> Result<()> {
    match command {
        NotesCommand::List => {
            let response: NoteListResponse =
                make_request(client.get(format!("{}/api/notes", base_url))).await?;
            output(&response, human)
        }

        NotesCommand::Create(args) => {
            let payload = NotePayload {
                title: &args.title,
                content: &args.content,
            };
            let note: Note = make_request(
                client
                    .post(format!("{}/api/notes", base_url))
                    .json(&payload),
            )
            .await?;
            output(&note, human)
        }

        NotesCommand::Show(args) => {
            let note: Note =
                make_request(client.get(format!("{}/api/notes/{}", base_url, args.id))).await?;
            output(&note, human)
        }

        NotesCommand::Update(args) => {
            let payload = NotePayload {
                title: &args.title,
                content: &args.content,
            };
            let note: Note = make_request(
                client
                    .put(format!("{}/api/notes/{}", base_url, args.id))
                    .json(&payload),
            )
            .await?;
            output(&note, human)
        }

        NotesCommand::Delete(args) => {
            // The server answers 204 with no body; report success locally.
            let response = client
                .delete(format!("{}/api/notes/{}", base_url, args.id))
                .send()
                .await
                .context("request failed")?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                bail!("server returned {}: {}", status, body.trim());
            }

            if human {
                println!("{} note #{}", "Deleted".green().bold(), args.id);
            } else {
                println!("{}", serde_json::json!({ "deleted": args.id }));
            }
            Ok(())
        }

        NotesCommand::Export => {
            let response = client
                .get(format!("{}/api/notes/export.md", base_url))
                .send()
                .await
                .context("request failed")?;
            let status = response.status();
            let body = response
                .text()
                .await
                .context("failed to read response body")?;
            if !status.is_success() {
                bail!("server returned {}: {}", status, body.trim());
            }

            print!("{}", body);
            Ok(())
        }
    }
}
