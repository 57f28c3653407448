//! Build mode selection.
//!
//! The mode is read once from `NODE_ENV`. Only the exact value `development`
//! selects [`BuildMode::Development`]; a missing variable or any other value
//! falls through to [`BuildMode::Production`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable carrying the mode signal.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

const DEVELOPMENT_SIGNAL: &str = "development";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Stable file names, hot reload, lint-on-build, source maps
    Development,
    /// Hashed file names, minification, bundle analysis
    #[default]
    Production,
}

impl BuildMode {
    /// Map a raw environment signal to a mode.
    ///
    /// ```
    /// use packrc_config::BuildMode;
    ///
    /// assert_eq!(BuildMode::from_signal(Some("development")), BuildMode::Development);
    /// assert_eq!(BuildMode::from_signal(Some("Development")), BuildMode::Production);
    /// assert_eq!(BuildMode::from_signal(None), BuildMode::Production);
    /// ```
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some(DEVELOPMENT_SIGNAL) => BuildMode::Development,
            _ => BuildMode::Production,
        }
    }

    /// Read the mode from `NODE_ENV`.
    pub fn from_env() -> Self {
        let signal = std::env::var(MODE_ENV_VAR).ok();
        let mode = Self::from_signal(signal.as_deref());
        tracing::debug!(signal = ?signal, mode = %mode, "resolved build mode from environment");
        mode
    }

    pub fn is_development(self) -> bool {
        matches!(self, BuildMode::Development)
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing for explicit selection (CLI flags, layout files).
///
/// Unlike [`BuildMode::from_signal`], unknown values are rejected.
impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}
