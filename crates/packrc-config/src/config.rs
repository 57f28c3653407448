//! The engine-facing configuration record and its builder.
//!
//! Every field is derived from a [`BuildMode`] and a [`ProjectLayout`] by a
//! pure function. Building cannot fail and performs no I/O.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::loaders::{LoaderRule, loader_rules};
use crate::mode::BuildMode;
use crate::optimization::{OptimizationSettings, optimization_settings};
use crate::output::{OutputOptions, filename_template};
use crate::plugins::{PluginDescriptor, plugin_list_with_template};

/// Extensions the engine tries when resolving bare imports
pub const RESOLVE_EXTENSIONS: [&str; 6] = [".js", ".json", ".png", ".jpg", ".jpeg", ".svg"];

/// Import alias for the context directory
pub const CONTEXT_ALIAS: &str = "@";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub mode: BuildMode,
    pub context: PathBuf,
    pub entry: Vec<String>,
    pub output: OutputOptions,
    pub resolve: ResolveOptions,
    pub optimization: OptimizationSettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<Devtool>,

    pub dev_server: DevServerOptions,
    pub plugins: Vec<PluginDescriptor>,
    pub module: ModuleOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
    pub alias: IndexMap<String, PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    SourceMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    pub port: u16,
    pub hot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOptions {
    pub rules: Vec<LoaderRule>,
}

/// Build the configuration for the default project layout.
///
/// # Example
///
/// ```
/// use packrc_config::{BuildMode, build_configuration};
///
/// let config = build_configuration(BuildMode::Development);
/// assert_eq!(config.output.filename.as_str(), "[name].js");
/// assert_eq!(config.plugins.len(), 4);
/// assert!(config.optimization.minimizer.is_empty());
/// ```
pub fn build_configuration(mode: BuildMode) -> Configuration {
    build_configuration_with(mode, &ProjectLayout::default())
}

/// Build the configuration for a specific project layout.
pub fn build_configuration_with(mode: BuildMode, layout: &ProjectLayout) -> Configuration {
    let config = Configuration {
        mode,
        context: layout.context_dir(),
        entry: layout.entries.clone(),
        output: OutputOptions {
            path: layout.output_path(),
            filename: filename_template(mode),
        },
        resolve: resolve_options(layout),
        optimization: optimization_settings(mode),
        devtool: devtool(mode),
        dev_server: dev_server(mode, layout),
        plugins: plugin_list_with_template(mode, &layout.html_template),
        module: ModuleOptions {
            rules: loader_rules(mode),
        },
    };

    tracing::debug!(
        mode = %mode,
        rules = config.module.rules.len(),
        plugins = config.plugins.len(),
        minimizers = config.optimization.minimizer.len(),
        "built configuration"
    );

    config
}

pub fn devtool(mode: BuildMode) -> Option<Devtool> {
    mode.is_development().then_some(Devtool::SourceMap)
}

pub fn dev_server(mode: BuildMode, layout: &ProjectLayout) -> DevServerOptions {
    DevServerOptions {
        port: layout.dev_port,
        hot: mode.is_development(),
    }
}

pub fn resolve_options(layout: &ProjectLayout) -> ResolveOptions {
    let mut alias = IndexMap::new();
    alias.insert(CONTEXT_ALIAS.to_string(), layout.context_dir());

    ResolveOptions {
        extensions: RESOLVE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        alias,
    }
}

impl Configuration {
    /// Parse from a `serde_json::Value` in the emitted shape.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// First loader rule matching `path`, the way the engine picks one.
    pub fn rule_for(&self, path: impl AsRef<Path>) -> Result<Option<&LoaderRule>> {
        let path = path.as_ref();
        for rule in &self.module.rules {
            if rule.matches(path)? {
                return Ok(Some(rule));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::LoaderStep;
    use crate::optimization::MinimizerPass;

    #[test]
    fn development_scenario() {
        let config = build_configuration(BuildMode::Development);
        assert_eq!(config.output.filename.as_str(), "[name].js");
        assert!(config.optimization.minimizer.is_empty());
        assert_eq!(config.plugins.len(), 4);
        assert_eq!(config.devtool, Some(Devtool::SourceMap));
        assert_eq!(config.dev_server, DevServerOptions { port: 3030, hot: true });
    }

    #[test]
    fn production_scenario() {
        let config = build_configuration(BuildMode::Production);
        assert_eq!(config.output.filename.as_str(), "[name].[hash].js");
        assert_eq!(
            config.optimization.minimizer,
            vec![MinimizerPass::ScriptMinify, MinimizerPass::StyleMinify]
        );
        assert_eq!(config.plugins.len(), 5);
        assert_eq!(config.devtool, None);
        assert!(!config.dev_server.hot);
    }

    #[test]
    fn building_is_idempotent() {
        for mode in [BuildMode::Development, BuildMode::Production] {
            assert_eq!(build_configuration(mode), build_configuration(mode));
        }
    }

    #[test]
    fn layout_flows_into_paths() {
        let layout = ProjectLayout {
            root: PathBuf::from("/app"),
            output_dir: PathBuf::from("build"),
            dev_port: 8080,
            ..ProjectLayout::default()
        };
        let config = build_configuration_with(BuildMode::Development, &layout);

        assert_eq!(config.context, PathBuf::from("/app/src"));
        assert_eq!(config.output.path, PathBuf::from("/app/build"));
        assert_eq!(config.resolve.alias["@"], PathBuf::from("/app/src"));
        assert_eq!(config.dev_server.port, 8080);
    }

    #[test]
    fn rule_for_picks_first_match() {
        let config = build_configuration(BuildMode::Development);

        let rule = config.rule_for("styles/app.scss").unwrap().unwrap();
        assert_eq!(rule.chain.last(), Some(&LoaderStep::CompileSass));

        let rule = config.rule_for("scripts/index.js").unwrap().unwrap();
        assert_eq!(rule.chain.last(), Some(&LoaderStep::LintOnBuild));

        assert!(config.rule_for("node_modules/x/index.js").unwrap().is_none());
        assert!(config.rule_for("README.md").unwrap().is_none());
    }

    #[test]
    fn value_round_trip_preserves_configuration() {
        let config = build_configuration(BuildMode::Production);
        let parsed = Configuration::from_value(config.to_value().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn json_uses_engine_keys() {
        let value = build_configuration(BuildMode::Development).to_value().unwrap();
        assert_eq!(value["mode"], "development");
        assert_eq!(value["devtool"], "source-map");
        assert_eq!(value["devServer"]["port"], 3030);
        assert_eq!(value["module"]["rules"][1]["test"], r"\.s[ac]ss$");
        assert_eq!(value["module"]["rules"][2]["exclude"], "node_modules");
        assert_eq!(value["module"]["rules"][2]["use"][1]["loader"], "eslint-loader");
    }

    #[test]
    fn toml_output_is_parseable() {
        let rendered = build_configuration(BuildMode::Production).to_toml().unwrap();
        let parsed: toml::Value = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed["mode"].as_str(), Some("production"));
        assert!(parsed.get("devtool").is_none());
    }
}
