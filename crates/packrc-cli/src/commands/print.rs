//! Print command implementation.
//!
//! Renders the configuration for the bundling engine to stdout or a file.

use std::fs;

use crate::cli::{OutputFormat, PrintArgs};
use crate::commands::utils::resolve_target;
use crate::error::Result;
use crate::ui;

/// Execute the print command.
///
/// # Arguments
///
/// * `args` - Parsed print arguments: mode/project selection, format,
///   `--compact` and `--out`
///
/// # Errors
///
/// Returns errors for a missing project directory, an invalid layout, or a
/// failed write to `--out`.
pub fn execute(args: PrintArgs) -> Result<()> {
    let target = resolve_target(&args.target)?;

    let rendered = match args.format {
        OutputFormat::Json if args.compact => target.config.to_json()?,
        OutputFormat::Json => target.config.to_json_pretty()?,
        OutputFormat::Toml => target.config.to_toml()?,
    };

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, ensure_trailing_newline(rendered))?;
            tracing::info!(path = %path.display(), mode = %target.mode, "wrote configuration");
            ui::success(&format!(
                "Wrote {} configuration to {}",
                target.mode,
                path.display()
            ));
        }
        None => print!("{}", ensure_trailing_newline(rendered)),
    }

    Ok(())
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
