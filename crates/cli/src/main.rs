//! docquery CLI — the main entry point.
//!
//! Commands:
//! - `login`    — Obtain and persist a session token
//! - `register` — Create an account
//! - `chat`     — Interactive workspace: files, selection, questions
//! - `init`     — Write a default config file

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "docquery",
    about = "docquery — ask questions about your documents",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session token
    Login {
        /// Username (prompted for when omitted)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Create an account
    Register,

    /// Enter the interactive workspace
    Chat,

    /// Write a default config file to ~/.docquery/config.toml
    Init,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Login { username } => commands::login::run(username).await?,
        Commands::Register => commands::register::run().await?,
        Commands::Chat => commands::chat::run().await?,
        Commands::Init => commands::init::run()?,
    }

    Ok(())
}
