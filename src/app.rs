//! Application startup and utilities.
//!
//! This module contains exit codes, the CLI error type, and tracing
//! setup that support the main entry point.

use ifpeek::iface::EnumerateError;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// No interface matched the query (exit code 1).
    pub const NOT_FOUND: ExitCode = ExitCode::FAILURE;

    /// Enumeration error (exit code 2) - backend failure, unsupported platform, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn enumeration_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Error type for CLI command execution.
#[derive(Debug, Error)]
pub enum AppError {
    /// Interface enumeration failed.
    #[error(transparent)]
    Enumerate(#[from] EnumerateError),

    /// Snapshot could not be encoded as JSON.
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so query results on stdout stay pipeable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
