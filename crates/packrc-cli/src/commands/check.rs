//! Check command implementation.
//!
//! Validates the built configuration and, by default, the project files it
//! points at.

use packrc_config::{ConfigValidator, FsValidator, SchemaValidator};

use crate::cli::CheckArgs;
use crate::commands::utils::resolve_target;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Resolve the mode and load the project layout
/// 2. Check configuration invariants (plugin order, loader chains, minimizers)
/// 3. Check the source directory, entries and HTML template exist (unless `--no-fs`)
///
/// # Errors
///
/// Returns the first violated invariant or missing file.
pub fn execute(args: CheckArgs) -> Result<()> {
    let target = resolve_target(&args.target)?;
    let config = &target.config;

    ui::info(&format!("Checking {} configuration...", target.mode));

    if args.no_fs {
        SchemaValidator.validate(config)?;
    } else {
        FsValidator::new(target.layout.clone()).validate(config)?;
    }

    tracing::debug!(
        rules = config.module.rules.len(),
        plugins = config.plugins.len(),
        "configuration passed validation"
    );

    ui::success(&format!(
        "{} configuration is valid ({} rules, {} plugins, {} minimizers)",
        target.mode,
        config.module.rules.len(),
        config.plugins.len(),
        config.optimization.minimizer.len()
    ));

    if args.no_fs {
        ui::warning("Skipped filesystem checks");
    }

    Ok(())
}
