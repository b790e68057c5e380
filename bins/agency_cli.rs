use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use client::{DeleteOutcome, HttpServicesApi, ServiceForm, SyncController};
use dotenvy::dotenv;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Manage the agency's service catalog from the terminal.
#[derive(Parser, Debug)]
#[command(name = "agency-cli", version, about)]
struct Cli {
    /// Server origin; falls back to API_BASE_URL, then the local default.
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every service.
    List,
    /// Add a service.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        icon: String,
        #[arg(long)]
        description: String,
    },
    /// Delete a service by id.
    Delete {
        id: u64,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

fn prompt_on_stdin(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let cli = Cli::parse();
    let api = HttpServicesApi::new(cli.base_url)?;

    match cli.command {
        Command::List => {
            let mut sync = SyncController::new(api, |_: &str| true);
            print!("{}", sync.load().await);
        }
        Command::Add { name, icon, description } => {
            let mut sync = SyncController::new(api, |_: &str| true);
            *sync.form_mut() = ServiceForm::new(name, icon, description);
            let result = sync.submit_create().await;
            if let Some(notice) = sync.notices().current() {
                println!("{}", notice.message);
            }
            result?;
            print!("{}", sync.view());
        }
        Command::Delete { id, yes } => {
            let confirm = move |prompt: &str| yes || prompt_on_stdin(prompt);
            let mut sync = SyncController::new(api, confirm);
            let outcome = sync.delete(id).await;
            if let Some(notice) = sync.notices().current() {
                println!("{}", notice.message);
            }
            match outcome? {
                DeleteOutcome::Deleted(_) => print!("{}", sync.view()),
                DeleteOutcome::Declined => println!("Cancelled."),
            }
        }
    }
    Ok(())
}
