//! Optimization settings.

use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSettings {
    pub split_chunks: SplitChunks,

    /// Executed by the engine, in order, over final artifacts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub minimizer: Vec<MinimizerPass>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitChunks {
    pub chunks: ChunkScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
    All,
    Async,
    Initial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinimizerPass {
    #[serde(rename = "terser-webpack-plugin")]
    ScriptMinify,
    #[serde(rename = "optimize-css-assets-webpack-plugin")]
    StyleMinify,
}

/// Production minimizer passes, in execution order
pub const PRODUCTION_MINIMIZERS: [MinimizerPass; 2] =
    [MinimizerPass::ScriptMinify, MinimizerPass::StyleMinify];

pub fn optimization_settings(mode: BuildMode) -> OptimizationSettings {
    let minimizer = match mode {
        BuildMode::Development => Vec::new(),
        BuildMode::Production => PRODUCTION_MINIMIZERS.to_vec(),
    };

    OptimizationSettings {
        split_chunks: SplitChunks {
            chunks: ChunkScope::All,
        },
        minimizer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_does_not_minify() {
        let settings = optimization_settings(BuildMode::Development);
        assert!(settings.minimizer.is_empty());
        assert_eq!(settings.split_chunks.chunks, ChunkScope::All);
    }

    #[test]
    fn production_minifies_scripts_then_styles() {
        let settings = optimization_settings(BuildMode::Production);
        assert_eq!(
            settings.minimizer,
            vec![MinimizerPass::ScriptMinify, MinimizerPass::StyleMinify]
        );
        assert_eq!(settings.split_chunks.chunks, ChunkScope::All);
    }

    #[test]
    fn empty_minimizer_is_omitted_from_output() {
        let value = serde_json::to_value(optimization_settings(BuildMode::Development)).unwrap();
        assert!(value.get("minimizer").is_none());
        assert_eq!(value["splitChunks"]["chunks"], "all");
    }
}
