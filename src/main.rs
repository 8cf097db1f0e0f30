use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use versopag::panel_commands::{self, PanelsCommand};
use versopag::server::{self, MigrateDirection};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the REST API server
    Serve {
        #[clap(short, long, default_value = "3000")]
        port: u16,
        #[clap(short, long, default_value = "versopag.db")]
        database: String,
        #[clap(long)]
        cors_origin: Option<String>,
    },
    /// Apply or roll back database migrations
    Migrate {
        #[clap(short, long, default_value = "versopag.db")]
        database: String,
        #[clap(subcommand)]
        direction: MigrateDirection,
    },
    /// Manage locally saved sponsor panels
    Panels {
        /// Directory holding the paineisSalvos.json slot
        #[clap(long, default_value = ".")]
        store: PathBuf,
        #[clap(subcommand)]
        command: PanelsCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Serve {
            port,
            database,
            cors_origin,
        } => {
            server::start_server(port, &database, cors_origin.as_deref()).await?;
        }
        Commands::Migrate {
            database,
            direction,
        } => {
            server::migrate_database(&database, direction).await?;
        }
        Commands::Panels { store, command } => {
            panel_commands::run(&store, command)?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("{}", log_level)))
        .without_time()
        .init();
}
