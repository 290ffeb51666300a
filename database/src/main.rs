use clap::{Parser, Subcommand};
use std::error::Error;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

/// Schema lifecycle for the nexscan explorer database.
///
/// The connection comes from `DATABASE_URL`, `DB_PATH` or the `DB_*` variables.
#[derive(Parser)]
#[command(name = "nexscan-database", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Lifecycle,
}

#[derive(Subcommand)]
enum Lifecycle {
    /// Provision the PostgreSQL database the jobs and API connect to
    Create {
        /// Overrides the name taken from the connection settings
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Bring the validator and snapshot tables up to date
    Migrate {
        /// Apply at most this many pending migrations
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Drop the explorer schema and rebuild it from the first migration
    Reset,
    /// List which migrations are applied and which are pending
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Lifecycle::Create { name } => commands::create::execute(name).await,
        Lifecycle::Migrate { steps } => commands::migrate::execute(steps).await,
        Lifecycle::Reset => commands::migrate::reset().await,
        Lifecycle::Status => commands::migrate::status().await,
    }
}
