//! Pluggable config validation strategies
//!
//! Separates schema validation (invariants of a built configuration) from
//! filesystem validation (the layout points at files that exist).

use crate::config::Configuration;
use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::loaders::{AssetClass, LoaderStep, compile};
use crate::optimization::{ChunkScope, PRODUCTION_MINIMIZERS};
use crate::plugins::PluginKind;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &Configuration) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use packrc_config::{BuildMode, ConfigValidator, SchemaValidator, build_configuration};
///
/// let config = build_configuration(BuildMode::Production);
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &Configuration) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        if config.dev_server.port == 0 {
            return Err(ConfigError::schema(
                "dev server port cannot be 0",
                "Set dev_port in packrc.toml to a free port",
            ));
        }

        validate_output(config)?;
        validate_rules(config)?;
        validate_plugins(config)?;
        validate_optimization(config)?;

        Ok(())
    }
}

fn validate_output(config: &Configuration) -> Result<()> {
    let hashed = config.output.filename.is_hashed();
    if hashed != config.mode.is_production() {
        return Err(ConfigError::schema(
            format!(
                "output filename '{}' does not match {} mode",
                config.output.filename, config.mode
            ),
            "Production output must be content-hashed; development output must not be",
        ));
    }
    Ok(())
}

fn validate_rules(config: &Configuration) -> Result<()> {
    for rule in &config.module.rules {
        compile(&rule.test)?;
        if let Some(exclude) = &rule.exclude {
            compile(exclude)?;
        }

        if rule.chain.is_empty() {
            return Err(ConfigError::schema(
                format!("loader rule '{}' has no steps", rule.test),
                "Every rule needs at least one loader",
            ));
        }
    }

    let stylesheet_patterns = AssetClass::ALL
        .into_iter()
        .filter(|class| class.is_stylesheet())
        .map(AssetClass::pattern);

    for pattern in stylesheet_patterns {
        let Some(rule) = config.module.rules.iter().find(|r| r.test == pattern) else {
            return Err(ConfigError::schema(
                format!("missing stylesheet rule '{pattern}'"),
                "Stylesheets need an extraction chain",
            ));
        };

        let starts_correctly = matches!(
            rule.chain.as_slice(),
            [LoaderStep::ExtractStyles(_), LoaderStep::ResolveCss, ..]
        );
        if !starts_correctly {
            return Err(ConfigError::schema(
                format!("stylesheet rule '{pattern}' must start with extraction then CSS resolution"),
                "Put the extract loader first and css-loader second",
            ));
        }

        if let LoaderStep::ExtractStyles(options) = &rule.chain[0] {
            if options.hmr != config.mode.is_development() {
                return Err(ConfigError::schema(
                    format!("style hot reload is {} in {} mode", options.hmr, config.mode),
                    "Hot reload of extracted styles is development-only",
                ));
            }
        }
    }

    validate_script_rule(config)
}

fn validate_script_rule(config: &Configuration) -> Result<()> {
    let pattern = AssetClass::Script.pattern();
    let Some(rule) = config.module.rules.iter().find(|r| r.test == pattern) else {
        return Err(ConfigError::schema(
            format!("missing script rule '{pattern}'"),
            "Scripts need a transpilation chain",
        ));
    };

    if !matches!(rule.chain.first(), Some(LoaderStep::Transpile(_))) {
        return Err(ConfigError::schema(
            format!("script rule '{pattern}' must start with transpilation"),
            "Put babel-loader first in the script chain",
        ));
    }

    let lints = rule.chain.contains(&LoaderStep::LintOnBuild);
    if lints != config.mode.is_development() {
        return Err(ConfigError::schema(
            format!("lint-on-build is {} in {} mode", if lints { "on" } else { "off" }, config.mode),
            "Lint-on-build runs in development builds only",
        ));
    }

    Ok(())
}

/// Plugins every build registers first, in this order
const BASE_PLUGINS: [PluginKind; 4] = [
    PluginKind::Html,
    PluginKind::Clean,
    PluginKind::Copy,
    PluginKind::CssExtract,
];

fn validate_plugins(config: &Configuration) -> Result<()> {
    let kinds: Vec<PluginKind> = config.plugins.iter().map(|p| p.kind()).collect();
    let position = |kind: PluginKind| kinds.iter().position(|k| *k == kind);

    if let (Some(clean), Some(copy)) = (position(PluginKind::Clean), position(PluginKind::Copy)) {
        if clean > copy {
            return Err(ConfigError::schema(
                "output cleaning runs after asset copying",
                "Register the clean plugin before the copy plugin",
            ));
        }
    }

    for (index, expected) in BASE_PLUGINS.iter().enumerate() {
        let found = kinds.get(index);
        if found != Some(expected) {
            return Err(ConfigError::schema(
                format!("plugin #{index} must be {expected:?}, found {found:?}"),
                "Register html, clean, copy and css-extract plugins first, in that order",
            ));
        }
    }

    let extra = &kinds[BASE_PLUGINS.len()..];
    let has_analyzer = extra.contains(&PluginKind::BundleAnalyzer);

    match (config.mode.is_production(), extra) {
        (false, []) | (true, [PluginKind::BundleAnalyzer]) => Ok(()),
        (false, _) if has_analyzer => Err(ConfigError::schema(
            "bundle analysis is enabled in development",
            "Only production builds register the analyzer",
        )),
        (true, _) if !has_analyzer => Err(ConfigError::schema(
            "bundle analysis is missing from production build",
            "Append the analyzer plugin in production",
        )),
        (true, _) => Err(ConfigError::schema(
            "bundle analysis must be the last plugin",
            "Move the analyzer plugin to the end of the list",
        )),
        (false, _) => Err(ConfigError::schema(
            format!("unexpected plugins after css-extract: {extra:?}"),
            "Development builds register exactly four plugins",
        )),
    }
}

fn validate_optimization(config: &Configuration) -> Result<()> {
    if config.optimization.split_chunks.chunks != ChunkScope::All {
        return Err(ConfigError::schema(
            "code splitting must cover all chunks",
            "Set splitChunks.chunks to 'all'",
        ));
    }

    let minimizer = config.optimization.minimizer.as_slice();
    if config.mode.is_production() && minimizer != PRODUCTION_MINIMIZERS {
        return Err(ConfigError::schema(
            format!("production minimizers are {minimizer:?}"),
            "Production minifies scripts first, then styles",
        ));
    }
    if config.mode.is_development() && !minimizer.is_empty() {
        return Err(ConfigError::schema(
            "development build registers minimizers",
            "Minification is production-only",
        ));
    }

    Ok(())
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`] first, then checks that the context directory,
/// local entries and the HTML template exist.
pub struct FsValidator {
    layout: ProjectLayout,
}

impl FsValidator {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &Configuration) -> Result<()> {
        SchemaValidator.validate(config)?;

        let context = self.layout.context_dir();
        if !context.is_dir() {
            return Err(ConfigError::ContextNotFound(context));
        }

        for entry in self.layout.local_entries() {
            if !entry.exists() {
                return Err(ConfigError::EntryNotFound(entry));
            }
        }

        let template = context.join(&self.layout.html_template);
        if !template.exists() {
            return Err(ConfigError::TemplateNotFound(template));
        }

        Ok(())
    }
}

/// Validate schema only (convenience function)
pub fn validate_schema(config: &Configuration) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Validate schema and filesystem (convenience function)
pub fn validate_fs(config: &Configuration, layout: &ProjectLayout) -> Result<()> {
    FsValidator::new(layout.clone()).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::build_configuration;
    use crate::loaders::ExtractStylesOptions;
    use crate::mode::BuildMode;
    use crate::optimization::MinimizerPass;
    use crate::plugins::PluginDescriptor;

    #[test]
    fn built_configurations_are_valid() {
        for mode in [BuildMode::Development, BuildMode::Production] {
            validate_schema(&build_configuration(mode)).unwrap();
        }
    }

    #[test]
    fn rejects_copy_before_clean() {
        let mut config = build_configuration(BuildMode::Development);
        config.plugins.swap(1, 2);
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("cleaning"));
        assert!(err.hint().is_some());
    }

    #[test]
    fn rejects_missing_clean() {
        for mode in [BuildMode::Development, BuildMode::Production] {
            let mut config = build_configuration(mode);
            config.plugins.retain(|p| p.kind() != PluginKind::Clean);
            let err = validate_schema(&config).unwrap_err();
            assert!(err.to_string().contains("Clean"), "{mode}: {err}");
        }
    }

    #[test]
    fn rejects_missing_html() {
        let mut config = build_configuration(BuildMode::Development);
        config.plugins.remove(0);
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_plugin_list_reduced_to_clean() {
        let mut config = build_configuration(BuildMode::Development);
        config.plugins = vec![PluginDescriptor::Clean];
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_extra_development_plugin() {
        let mut config = build_configuration(BuildMode::Development);
        config.plugins.push(PluginDescriptor::Clean);
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("unexpected plugins"));
    }

    #[test]
    fn rejects_duplicate_analyzer() {
        let mut config = build_configuration(BuildMode::Production);
        config.plugins.push(PluginDescriptor::BundleAnalyzer);
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_lint_in_production() {
        let mut config = build_configuration(BuildMode::Production);
        config.module.rules[2].chain.push(LoaderStep::LintOnBuild);
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("lint-on-build"));
    }

    #[test]
    fn rejects_missing_lint_in_development() {
        let mut config = build_configuration(BuildMode::Development);
        config.module.rules[2].chain.pop();
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_hot_reload_in_production() {
        let mut config = build_configuration(BuildMode::Production);
        config.module.rules[1].chain[0] = LoaderStep::ExtractStyles(ExtractStylesOptions {
            hmr: true,
            reload_all: true,
        });
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("hot reload"));
    }

    #[test]
    fn rejects_analyzer_in_development() {
        let mut config = build_configuration(BuildMode::Development);
        config.plugins.push(PluginDescriptor::BundleAnalyzer);
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_analyzer_not_last() {
        let mut config = build_configuration(BuildMode::Production);
        config.plugins.swap(3, 4);
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_reordered_minimizers() {
        let mut config = build_configuration(BuildMode::Production);
        config.optimization.minimizer = vec![MinimizerPass::StyleMinify, MinimizerPass::ScriptMinify];
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_minimizers_in_development() {
        let mut config = build_configuration(BuildMode::Development);
        config.optimization.minimizer = vec![MinimizerPass::ScriptMinify];
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_mismatched_filename() {
        let mut config = build_configuration(BuildMode::Development);
        config.mode = BuildMode::Production;
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("[name].js"));
    }

    #[test]
    fn rejects_stylesheet_chain_without_extraction() {
        let mut config = build_configuration(BuildMode::Production);
        config.module.rules[0].chain.remove(0);
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn rejects_empty_entries() {
        let mut config = build_configuration(BuildMode::Production);
        config.entry.clear();
        assert!(matches!(validate_schema(&config), Err(ConfigError::NoEntries)));
    }

    #[test]
    fn rejects_invalid_pattern() {
        let mut config = build_configuration(BuildMode::Production);
        config.module.rules[3].test = "[".to_string();
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }
}
