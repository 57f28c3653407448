use clap::{Args, Subcommand};
use packrc_config::BuildMode;
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::parse_mode;

/// Available packrc subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the configuration for the current mode
    ///
    /// Emits the object the bundling engine consumes. JSON by default.
    Print(PrintArgs),

    /// Validate the configuration and the project layout
    ///
    /// Checks the configuration invariants and, unless --no-fs is given,
    /// that the source directory, entries and HTML template exist.
    Check(CheckArgs),

    /// Show which loader chain applies to a file
    Explain(ExplainArgs),
}

/// Mode and project selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct ModeArgs {
    /// Build mode (defaults to NODE_ENV; anything but "development" is production)
    ///
    /// Accepts development (dev) or production (prod).
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<BuildMode>,

    /// Project root containing packrc.toml and the source directory
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub target: ModeArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: ModeArgs,

    /// Skip filesystem checks (schema only)
    #[arg(long)]
    pub no_fs: bool,
}

/// Arguments for the explain command
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// File path, relative to the source directory
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[command(flatten)]
    pub target: ModeArgs,
}
