//! Project layout: the directory and entry facts a configuration is anchored on.
//!
//! Layered with figment, lowest priority first:
//!
//! 1. Built-in defaults (`src`, `dist`, `./index.html`, port 3030)
//! 2. `packrc.toml` in the project root, if present
//! 3. `PACKRC_*` environment variables (`PACKRC_OUTPUT_DIR=build`)

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::plugins::DEFAULT_HTML_TEMPLATE;

/// Layout file looked up in the project root
pub const LAYOUT_FILE: &str = "packrc.toml";

/// Prefix for layout environment overrides
pub const ENV_PREFIX: &str = "PACKRC_";

pub const DEFAULT_DEV_PORT: u16 = 3030;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    /// Project root; set by the caller, never read from the layout file
    #[serde(skip)]
    pub root: PathBuf,

    /// Source directory, relative to root. Entries resolve against it.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_html_template")]
    pub html_template: String,

    #[serde(default = "default_entries")]
    pub entries: Vec<String>,

    #[serde(default = "default_dev_port")]
    pub dev_port: u16,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            html_template: default_html_template(),
            entries: default_entries(),
            dev_port: DEFAULT_DEV_PORT,
        }
    }
}

impl ProjectLayout {
    /// Load the layout for the project at `root`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use packrc_config::ProjectLayout;
    ///
    /// let layout = ProjectLayout::load(".").unwrap();
    /// assert_eq!(layout.dev_port, 3030);
    /// ```
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let file = root.join(LAYOUT_FILE);

        if file.exists() {
            tracing::debug!(path = %file.display(), "reading layout file");
        }

        let mut layout: ProjectLayout = Figment::new()
            .merge(Serialized::defaults(ProjectLayout::default()))
            .merge(Toml::file(&file))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        layout.root = root.to_path_buf();
        Ok(layout)
    }

    /// Directory the engine resolves entries against.
    pub fn context_dir(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    /// Directory the engine writes into.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }

    /// Entries that point at files under the context directory.
    ///
    /// Package specifiers such as `@babel/polyfill` are skipped.
    pub fn local_entries(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let context = self.context_dir();
        self.entries
            .iter()
            .filter(|entry| entry.starts_with("./") || entry.starts_with("../"))
            .map(move |entry| context.join(entry))
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_html_template() -> String {
    DEFAULT_HTML_TEMPLATE.to_string()
}

fn default_entries() -> Vec<String> {
    vec![
        "@babel/polyfill".to_string(),
        "./scripts/index.js".to_string(),
    ]
}

fn default_dev_port() -> u16 {
    DEFAULT_DEV_PORT
}
