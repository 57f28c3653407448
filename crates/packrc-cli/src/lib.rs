//! packrc CLI - print, validate and explain bundler configuration.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - `commands` - `print`, `check` and `explain`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - colored status lines on stderr
//!
//! The configuration itself comes from `packrc-config`; this crate only
//! decides the mode, loads the project layout and renders the result.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
