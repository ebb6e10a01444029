mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "viva", version, about = "Interview room signaling and agent tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the signaling service.
    Serve {
        #[arg(short, long, default_value = "viva.toml")]
        config: String,
    },

    /// Show the report of a finished interview.
    Report {
        room: Option<String>,

        #[arg(long, env = "VIVA_API_BASE", default_value = "http://localhost:8000")]
        api_base: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Serve { config } => commands::serve(&config).await,
        Commands::Report { room, api_base } => commands::report(room, &api_base).await,
    }
}
