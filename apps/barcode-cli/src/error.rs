//! # CLI Error Types
//!
//! Errors that end a `gochi-barcode` run, and the exit status each maps to.
//!
//! ```text
//! ConfigError ─┐
//! BarcodeError ┼──► CliError ──► exit_code() ──► process exit status
//! io / json   ─┘
//! ```

use gochi_core::BarcodeError;
use thiserror::Error;

use crate::config::ConfigError;

/// Exit status for usage and configuration problems.
pub const EXIT_USAGE: i32 = 2;

/// Exit status for runtime failures and rejected codes.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Bad argument to a subcommand, e.g. a check-digit body of the wrong length.
    #[error("{0}")]
    Barcode(#[from] BarcodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::Barcode(_) => EXIT_USAGE,
            CliError::Io(_) | CliError::Json(_) => EXIT_FAILURE,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
