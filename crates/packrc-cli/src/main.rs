//! packrc CLI - derive bundler configuration from the build mode.
//!
//! Entry point: argument parsing, logging initialization and command dispatch.

use clap::Parser;
use miette::Result;
use packrc_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init(args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Print(print_args) => commands::print_execute(print_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Explain(explain_args) => commands::explain_execute(explain_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
