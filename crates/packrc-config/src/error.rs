//! Error types for layout loading, serialization and validation.
//!
//! Building a configuration never fails. Everything around it (reading the
//! project layout, emitting the result, checking it) can.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown build mode: {0} (expected 'development' or 'production')")]
    InvalidMode(String),

    // Layout loading errors
    #[error("failed to load project layout: {0}")]
    Load(String),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    // Emission errors
    #[error("failed to serialize configuration: {0}")]
    Serialize(String),

    #[error("invalid loader pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // Schema validation errors (no filesystem checks)
    #[error("no entries specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("context directory not found: {}", .0.display())]
    ContextNotFound(PathBuf),

    #[error("entry path not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    #[error("HTML template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),
}

impl ConfigError {
    /// Shorthand for a schema violation with an actionable hint.
    pub(crate) fn schema(message: impl Into<String>, hint: impl Into<String>) -> Self {
        ConfigError::SchemaValidation {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Hint attached to the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            ConfigError::SchemaValidation { hint, .. } => hint.as_deref(),
            ConfigError::InvalidMode(_) => Some("Pass --mode development or --mode production"),
            ConfigError::Load(_) => Some("Check packrc.toml syntax and PACKRC_* variables"),
            _ => None,
        }
    }
}
