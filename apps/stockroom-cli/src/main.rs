//! # Stockroom CLI
//!
//! Command-line front end for the product catalog.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  parse args ──► CliConfig::load ──► tracing subscriber                 │
//! │                                           │                             │
//! │                                           ▼                             │
//! │                              Database::new (+ migrations)              │
//! │                                           │                             │
//! │                       Arc<dyn ProductGateway> = db.products()          │
//! │                          │                         │                    │
//! │                          ▼                         ▼                    │
//! │               CreateProductUseCase        ListProductUseCase           │
//! │                          └──────────┬──────────────┘                    │
//! │                                     ▼                                   │
//! │                              App::run(command) ──► stdout               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod config;
mod error;

use std::process::ExitCode;
use std::sync::Arc;

use stockroom_core::{CreateProductUseCase, ListProductUseCase, ProductGateway};
use stockroom_db::Database;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::commands::{App, Command, USAGE};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("error: {err}");
            if matches!(err, CliError::Usage(_)) {
                eprintln!();
                eprintln!("{USAGE}");
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

async fn run() -> CliResult<()> {
    let command = Command::parse(std::env::args().skip(1))?;

    if command == Command::Help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = CliConfig::load()?;
    init_tracing(&config.log_filter);

    info!(
        database = %config.database_path.display(),
        validate_input = config.validate_input,
        "Configuration loaded"
    );

    let db = Database::new(config.db_config()).await?;

    let gateway: Arc<dyn ProductGateway> = Arc::new(db.products());
    let app = App {
        create: CreateProductUseCase::new(gateway.clone())
            .with_input_validation(config.validate_input),
        list: ListProductUseCase::new(gateway),
    };

    let result = app.run(command).await;
    db.close().await;

    println!("{}", result?);
    Ok(())
}

/// Logs go to stderr so stdout stays pure JSON.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
