//! Loader chains and the rules that bind them to file patterns.
//!
//! Chains are ordered: each step receives the previous step's output, so the
//! engine applies them last-to-first. The step order here is the order the
//! engine expects in its `use` list.

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;

/// Transpiler preset applied to every script
pub const BABEL_PRESET: &str = "@babel/preset-env";

/// Transpiler plugins applied to every script
pub const BABEL_PLUGINS: [&str; 2] = [
    "@babel/plugin-proposal-class-properties",
    "@babel/plugin-proposal-optional-chaining",
];

/// One transformation step, tagged by the loader name the engine resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "loader", content = "options")]
pub enum LoaderStep {
    /// Pull styles out of the script graph into standalone files
    #[serde(rename = "mini-css-extract-plugin/loader")]
    ExtractStyles(ExtractStylesOptions),

    /// Resolve `@import` and `url()` in CSS
    #[serde(rename = "css-loader")]
    ResolveCss,

    /// Compile Sass/SCSS to CSS
    #[serde(rename = "sass-loader")]
    CompileSass,

    /// Transpile modern script syntax
    #[serde(rename = "babel-loader")]
    Transpile(TranspileOptions),

    /// Lint sources as part of the build (development only)
    #[serde(rename = "eslint-loader")]
    LintOnBuild,

    /// Emit the file verbatim and return its public URL
    #[serde(rename = "file-loader")]
    EmitFile,
}

impl LoaderStep {
    /// Loader name as the engine knows it.
    pub fn loader_name(&self) -> &'static str {
        match self {
            LoaderStep::ExtractStyles(_) => "mini-css-extract-plugin/loader",
            LoaderStep::ResolveCss => "css-loader",
            LoaderStep::CompileSass => "sass-loader",
            LoaderStep::Transpile(_) => "babel-loader",
            LoaderStep::LintOnBuild => "eslint-loader",
            LoaderStep::EmitFile => "file-loader",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStylesOptions {
    /// Hot module replacement for extracted styles
    pub hmr: bool,
    /// Reload every stylesheet when one changes
    pub reload_all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspileOptions {
    pub presets: Vec<String>,
    pub plugins: Vec<String>,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            presets: vec![BABEL_PRESET.to_string()],
            plugins: BABEL_PLUGINS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Asset classes that receive a loader chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetClass {
    Stylesheet,
    PreprocessedStylesheet,
    Script,
    Image,
    Font,
}

impl AssetClass {
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Stylesheet,
        AssetClass::PreprocessedStylesheet,
        AssetClass::Script,
        AssetClass::Image,
        AssetClass::Font,
    ];

    /// Regex source matched against module paths.
    pub fn pattern(self) -> &'static str {
        match self {
            AssetClass::Stylesheet => r"\.css$",
            AssetClass::PreprocessedStylesheet => r"\.s[ac]ss$",
            AssetClass::Script => r"\.js$",
            AssetClass::Image => r"\.(png|jpg|svg|gif|jpeg|ico)$",
            AssetClass::Font => r"\.(ttf|woff|woff2|eot)$",
        }
    }

    pub fn exclude_pattern(self) -> Option<&'static str> {
        match self {
            AssetClass::Script => Some("node_modules"),
            _ => None,
        }
    }

    pub fn is_stylesheet(self) -> bool {
        matches!(
            self,
            AssetClass::Stylesheet | AssetClass::PreprocessedStylesheet
        )
    }
}

/// Chains for the three asset classes whose pipelines depend on the mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderChains {
    pub stylesheet: Vec<LoaderStep>,
    pub preprocessed_stylesheet: Vec<LoaderStep>,
    pub script: Vec<LoaderStep>,
}

fn style_chain(mode: BuildMode, extra: Option<LoaderStep>) -> Vec<LoaderStep> {
    let mut chain = vec![
        LoaderStep::ExtractStyles(ExtractStylesOptions {
            hmr: mode.is_development(),
            reload_all: true,
        }),
        LoaderStep::ResolveCss,
    ];
    chain.extend(extra);
    chain
}

fn script_chain(mode: BuildMode) -> Vec<LoaderStep> {
    let mut chain = vec![LoaderStep::Transpile(TranspileOptions::default())];
    if mode.is_development() {
        chain.push(LoaderStep::LintOnBuild);
    }
    chain
}

/// Ordered chains for stylesheets, preprocessed stylesheets and scripts.
pub fn loader_chains(mode: BuildMode) -> LoaderChains {
    LoaderChains {
        stylesheet: style_chain(mode, None),
        preprocessed_stylesheet: style_chain(mode, Some(LoaderStep::CompileSass)),
        script: script_chain(mode),
    }
}

/// A loader chain bound to a module path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderRule {
    pub test: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(rename = "use")]
    pub chain: Vec<LoaderStep>,
}

impl LoaderRule {
    fn for_class(class: AssetClass, chain: Vec<LoaderStep>) -> Self {
        Self {
            test: class.pattern().to_string(),
            exclude: class.exclude_pattern().map(str::to_string),
            chain,
        }
    }

    /// Whether the rule applies to `path`.
    ///
    /// Path separators are normalized to `/` before matching.
    pub fn matches(&self, path: impl AsRef<Path>) -> Result<bool> {
        let normalized = path.as_ref().to_string_lossy().replace('\\', "/");

        if !compile(&self.test)?.is_match(&normalized) {
            return Ok(false);
        }

        match &self.exclude {
            Some(exclude) => Ok(!compile(exclude)?.is_match(&normalized)),
            None => Ok(true),
        }
    }
}

pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Full rule list in engine order: stylesheets, preprocessed stylesheets,
/// scripts, images, fonts.
pub fn loader_rules(mode: BuildMode) -> Vec<LoaderRule> {
    let LoaderChains {
        stylesheet,
        preprocessed_stylesheet,
        script,
    } = loader_chains(mode);

    vec![
        LoaderRule::for_class(AssetClass::Stylesheet, stylesheet),
        LoaderRule::for_class(AssetClass::PreprocessedStylesheet, preprocessed_stylesheet),
        LoaderRule::for_class(AssetClass::Script, script),
        LoaderRule::for_class(AssetClass::Image, vec![LoaderStep::EmitFile]),
        LoaderRule::for_class(AssetClass::Font, vec![LoaderStep::EmitFile]),
    ]
}
