//! Build plugin descriptors.

use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;

/// Default HTML template, relative to the context directory
pub const DEFAULT_HTML_TEMPLATE: &str = "./index.html";

/// Where extracted CSS lands inside the output directory
pub const EXTRACTED_CSS_FILENAME: &str = "styles/[name].css";

/// Files the copy step leaves to dedicated pipelines
pub const COPY_IGNORE: [&str; 4] = ["*.js", "**/scripts/*", "*.html", "**/styles/*"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginDescriptor {
    /// Emit an HTML page with the bundles injected
    Html(HtmlPluginOptions),
    /// Empty the output directory before writing
    Clean,
    /// Copy static assets into the output directory
    Copy(CopyPluginOptions),
    /// Write extracted CSS to standalone files
    CssExtract(CssExtractOptions),
    /// Report bundle composition after the build
    BundleAnalyzer,
}

impl PluginDescriptor {
    pub fn kind(&self) -> PluginKind {
        match self {
            PluginDescriptor::Html(_) => PluginKind::Html,
            PluginDescriptor::Clean => PluginKind::Clean,
            PluginDescriptor::Copy(_) => PluginKind::Copy,
            PluginDescriptor::CssExtract(_) => PluginKind::CssExtract,
            PluginDescriptor::BundleAnalyzer => PluginKind::BundleAnalyzer,
        }
    }
}

/// Discriminant-only view of [`PluginDescriptor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    Html,
    Clean,
    Copy,
    CssExtract,
    BundleAnalyzer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlPluginOptions {
    pub template: String,
    pub minify: HtmlMinifyOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMinifyOptions {
    pub collapse_whitespace: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPluginOptions {
    pub patterns: Vec<CopyPattern>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyPattern {
    pub from: String,
    pub glob_options: GlobOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobOptions {
    /// Include dot files
    pub dot: bool,
    pub ignore: Vec<String>,
}

impl Default for CopyPattern {
    fn default() -> Self {
        Self {
            from: "**/*".to_string(),
            glob_options: GlobOptions {
                dot: true,
                ignore: COPY_IGNORE.iter().map(|p| p.to_string()).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssExtractOptions {
    pub filename: String,
}

/// Plugins in registration order for the default HTML template.
pub fn plugin_list(mode: BuildMode) -> Vec<PluginDescriptor> {
    plugin_list_with_template(mode, DEFAULT_HTML_TEMPLATE)
}

/// Plugins in registration order.
///
/// Cleaning always precedes copying. Bundle analysis is appended last in
/// production only.
pub fn plugin_list_with_template(mode: BuildMode, template: &str) -> Vec<PluginDescriptor> {
    let mut plugins = vec![
        PluginDescriptor::Html(HtmlPluginOptions {
            template: template.to_string(),
            minify: HtmlMinifyOptions {
                collapse_whitespace: mode.is_production(),
            },
        }),
        PluginDescriptor::Clean,
        PluginDescriptor::Copy(CopyPluginOptions {
            patterns: vec![CopyPattern::default()],
        }),
        PluginDescriptor::CssExtract(CssExtractOptions {
            filename: EXTRACTED_CSS_FILENAME.to_string(),
        }),
    ];

    if mode.is_production() {
        plugins.push(PluginDescriptor::BundleAnalyzer);
    }

    plugins
}
