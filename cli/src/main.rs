//! Command-line client for the cascade demo stack.
//!
//! Talks to the gateway tier, so every command exercises the full relay
//! chain. Configuration via environment:
//! - CASCADE_URL: Base URL of the gateway (default: http://localhost:8080)

mod commands;

use clap::{Parser, Subcommand};

use commands::{events::EventsArgs, notes::NotesCommand, ping::PingArgs};

/// Cascade demo stack CLI
///
/// Interact with the gateway from the command line. JSON output by default;
/// pass --human for formatted text.
#[derive(Parser)]
#[command(name = "cascade")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Gateway base URL
    #[arg(
        long,
        env = "CASCADE_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a success event through the whole chain
    Ping(PingArgs),

    /// List recorded events
    Events(EventsArgs),

    /// Work with notes
    #[command(subcommand)]
    Notes(NotesCommand),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(client) => client,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Ping(args) => commands::ping::execute(&client, &cli.url, cli.human, args).await,
        Commands::Events(args) => {
            commands::events::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Notes(command) => {
            commands::notes::execute(&client, &cli.url, cli.human, command).await
        }
    };

    if let Err(error) = result {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}
