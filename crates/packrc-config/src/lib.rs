//! Mode-driven build configuration for front-end bundling engines.
//!
//! One environment signal (`NODE_ENV`) selects a [`BuildMode`]; four pure
//! derivations turn it into output naming, loader chains, plugins and
//! optimization settings, assembled into a [`Configuration`] the engine
//! consumes as-is.
//!
//! ```
//! use packrc_config::{BuildMode, build_configuration};
//!
//! let config = build_configuration(BuildMode::from_signal(None));
//! assert_eq!(config.mode, BuildMode::Production);
//! assert_eq!(config.optimization.minimizer.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod loaders;
pub mod mode;
pub mod optimization;
pub mod output;
pub mod plugins;
pub mod validation;

// Re-export main types
pub use config::*;
pub use error::*;
pub use layout::{ENV_PREFIX, LAYOUT_FILE, ProjectLayout};
pub use loaders::{
    AssetClass, ExtractStylesOptions, LoaderChains, LoaderRule, LoaderStep, TranspileOptions,
    loader_chains, loader_rules,
};
pub use mode::{BuildMode, MODE_ENV_VAR};
pub use optimization::{
    ChunkScope, MinimizerPass, OptimizationSettings, SplitChunks, optimization_settings,
};
pub use output::{FilenameTemplate, OutputOptions, filename_template};
pub use plugins::{PluginDescriptor, PluginKind, plugin_list, plugin_list_with_template};

// Re-export validation
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
