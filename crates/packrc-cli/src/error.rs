//! Error handling for the packrc CLI.
//!
//! Commands return [`CliError`]; `main` converts it into a miette report via
//! [`cli_error_to_miette`] so hints from the configuration layer reach the user.

use std::path::PathBuf;

use packrc_config::ConfigError;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Layout loading, serialization or validation failures
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Project directory does not exist
    #[error("Project directory not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(e) => match e.hint() {
            Some(hint) => miette::miette!(help = hint.to_string(), "{}", e),
            None => miette::miette!("{}", e),
        },
        CliError::ProjectNotFound(path) => miette::miette!(
            help = "Pass an existing directory to --cwd",
            "Project directory not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}
