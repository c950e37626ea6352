//! Error types for the command-line front end.

use stockroom_core::CoreError;
use stockroom_db::DbError;
use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can end a `stockroom` invocation early.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Could not write output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }

    /// Process exit code: 2 for bad invocations, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) | CliError::Config(_) => 2,
            CliError::Core(CoreError::Validation(_)) => 2,
            _ => 1,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
