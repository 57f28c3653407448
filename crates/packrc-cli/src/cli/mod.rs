//! Command-line interface definition for packrc.
//!
//! # Command Structure
//!
//! - `packrc print` - Emit the configuration as JSON or TOML
//! - `packrc check` - Validate the configuration and project layout
//! - `packrc explain` - Show the loader chain a file would receive

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ExplainArgs, ModeArgs, PrintArgs};
pub use enums::*;
pub use validation::parse_mode;

/// packrc - mode-driven bundler configuration
#[derive(Parser, Debug)]
#[command(
    name = "packrc",
    version,
    about = "Derive bundler configuration from the build mode",
    long_about = "packrc reads NODE_ENV (or --mode) and emits the matching bundler configuration:\n\
                  output naming, loader chains, plugins and optimization settings.\n\
                  Anything other than NODE_ENV=development builds for production."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
