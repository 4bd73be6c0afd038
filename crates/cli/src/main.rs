//! People Directory CLI - Drive the directory page from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the current list
//! directory-cli list
//!
//! # Submit the form (the privacy policy must be accepted)
//! directory-cli add -f Ada -l Lovelace -r admin --accept-privacy-policy
//!
//! # Click delete on a record
//! directory-cli delete 4f1c2a6e-1b0f-4e57-9a53-3f1f2d0c9b11
//!
//! # Point at another backend and print the list as HTML
//! directory-cli --api-url http://directory.internal:8000/ list --html
//! ```
//!
//! # Environment Variables
//!
//! - `DIRECTORY_API_URL` - Backend URL (default: `http://localhost:8000/`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::people::{Output, PeopleCommand};

#[derive(Parser)]
#[command(name = "directory-cli")]
#[command(author, version, about = "People directory CLI")]
struct Cli {
    /// Backend URL, overrides `DIRECTORY_API_URL`
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print the list as an HTML fragment
    #[arg(long, global = true)]
    html: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current list
    List,
    /// Fill the form and click submit
    Add {
        /// First name
        #[arg(short, long)]
        first_name: String,

        /// Last name
        #[arg(short, long)]
        last_name: String,

        /// Role, as chosen in the role dropdown
        #[arg(short, long)]
        role: String,

        /// Tick the privacy policy checkbox before submitting
        #[arg(long)]
        accept_privacy_policy: bool,
    },
    /// Delete a record by its server-assigned ID
    Delete {
        /// Record ID
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let output = if cli.html { Output::Html } else { Output::Text };

    let command = match cli.command {
        Commands::List => PeopleCommand::List,
        Commands::Add {
            first_name,
            last_name,
            role,
            accept_privacy_policy,
        } => PeopleCommand::Add {
            first_name,
            last_name,
            role,
            accept_privacy_policy,
        },
        Commands::Delete { id } => PeopleCommand::Delete { id },
    };

    commands::people::run(cli.api_url.as_deref(), command, output).await?;
    Ok(())
}
