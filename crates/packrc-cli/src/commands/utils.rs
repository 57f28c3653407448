//! Shared helpers: mode resolution and project loading.

use std::path::PathBuf;

use packrc_config::{BuildMode, Configuration, ProjectLayout, build_configuration_with};

use crate::cli::ModeArgs;
use crate::error::{CliError, Result};

/// Mode, layout and configuration for one invocation
#[derive(Debug)]
pub struct ResolvedTarget {
    pub mode: BuildMode,
    pub layout: ProjectLayout,
    pub config: Configuration,
}

/// Resolve mode and layout, then build the configuration.
///
/// An explicit `--mode` wins over `NODE_ENV`. The project root is `--cwd`
/// or the current directory, and must exist.
///
/// # Errors
///
/// Returns [`CliError::ProjectNotFound`] for a missing root and
/// [`CliError::Config`] when `packrc.toml` or `PACKRC_*` values fail to load.
///
/// # Example
///
/// ```no_run
/// use packrc_cli::cli::ModeArgs;
/// use packrc_cli::commands::resolve_target;
/// use packrc_config::BuildMode;
///
/// let args = ModeArgs { mode: Some(BuildMode::Development), cwd: None };
/// let target = resolve_target(&args).unwrap();
/// assert_eq!(target.config.plugins.len(), 4);
/// ```
pub fn resolve_target(args: &ModeArgs) -> Result<ResolvedTarget> {
    let mode = match args.mode {
        Some(mode) => {
            tracing::debug!(mode = %mode, "build mode from --mode");
            mode
        }
        None => BuildMode::from_env(),
    };

    let root = project_root(args.cwd.clone())?;
    let layout = ProjectLayout::load(&root)?;
    let config = build_configuration_with(mode, &layout);

    Ok(ResolvedTarget {
        mode,
        layout,
        config,
    })
}

fn project_root(cwd: Option<PathBuf>) -> Result<PathBuf> {
    let root = match cwd {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    if !root.is_dir() {
        return Err(CliError::ProjectNotFound(root));
    }
    Ok(root)
}
