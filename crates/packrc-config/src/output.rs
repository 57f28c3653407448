//! Output naming.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;

/// Placeholder the engine substitutes with the chunk name
pub const NAME_PLACEHOLDER: &str = "[name]";
/// Placeholder the engine substitutes with the content hash
pub const HASH_PLACEHOLDER: &str = "[hash]";

/// File name pattern for emitted artifacts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    /// `[name].<ext>` in development, `[name].[hash].<ext>` otherwise.
    ///
    /// ```
    /// use packrc_config::{BuildMode, FilenameTemplate};
    ///
    /// assert_eq!(FilenameTemplate::for_mode(BuildMode::Development, "js").as_str(), "[name].js");
    /// assert_eq!(FilenameTemplate::for_mode(BuildMode::Production, "js").as_str(), "[name].[hash].js");
    /// ```
    pub fn for_mode(mode: BuildMode, ext: &str) -> Self {
        match mode {
            BuildMode::Development => Self(format!("{NAME_PLACEHOLDER}.{ext}")),
            BuildMode::Production => Self(format!("{NAME_PLACEHOLDER}.{HASH_PLACEHOLDER}.{ext}")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_hashed(&self) -> bool {
        self.0.contains(HASH_PLACEHOLDER)
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Script bundle filename for the given mode.
pub fn filename_template(mode: BuildMode) -> FilenameTemplate {
    FilenameTemplate::for_mode(mode, "js")
}

/// Where and how the engine writes output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    pub path: PathBuf,
    pub filename: FilenameTemplate,
}
