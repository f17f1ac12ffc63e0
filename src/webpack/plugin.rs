//! Plugin descriptors.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// A bundler plugin and its options.
///
/// Serialized with a `plugin` tag naming the plugin class, e.g.
/// `{"plugin": "ExtractTextPlugin", "filename": "[name].[chunkhash].css"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", rename_all_fields = "camelCase")]
pub enum Plugin {
    /// Compile-time constants, substituted literally into the bundle.
    #[serde(rename = "DefinePlugin")]
    Define {
        definitions: BTreeMap<String, String>,
    },
    /// Do not emit assets when compilation reports errors.
    #[serde(rename = "NoErrorsPlugin")]
    NoErrors,
    /// Generated landing-page document.
    #[serde(rename = "HtmlWebpackPlugin")]
    Html(HtmlOptions),
    /// Shared-chunk extraction into the named vendor chunks.
    #[serde(rename = "CommonsChunkPlugin")]
    CommonsChunk { names: Vec<String> },
    /// Skip modules matching `resource_reg_exp` inside `context_reg_exp`.
    #[serde(rename = "IgnorePlugin")]
    Ignore {
        resource_reg_exp: String,
        context_reg_exp: String,
    },
    /// Write extracted stylesheets to standalone files.
    #[serde(rename = "ExtractTextPlugin")]
    ExtractText { filename: String },
    #[serde(rename = "DedupePlugin")]
    Dedupe,
    #[serde(rename = "MinChunkSizePlugin")]
    MinChunkSize { min_chunk_size: u64 },
    #[serde(rename = "OccurrenceOrderPlugin")]
    OccurrenceOrder { prefer_entry: bool },
    #[serde(rename = "UglifyJsPlugin")]
    UglifyJs(UglifyOptions),
    /// Copy static files into the output tree.
    #[serde(rename = "CopyWebpackPlugin")]
    Copy { patterns: Vec<CopyPattern> },
}

impl Plugin {
    /// The plugin class name, as used in the serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Define { .. } => "DefinePlugin",
            Self::NoErrors => "NoErrorsPlugin",
            Self::Html(_) => "HtmlWebpackPlugin",
            Self::CommonsChunk { .. } => "CommonsChunkPlugin",
            Self::Ignore { .. } => "IgnorePlugin",
            Self::ExtractText { .. } => "ExtractTextPlugin",
            Self::Dedupe => "DedupePlugin",
            Self::MinChunkSize { .. } => "MinChunkSizePlugin",
            Self::OccurrenceOrder { .. } => "OccurrenceOrderPlugin",
            Self::UglifyJs(_) => "UglifyJsPlugin",
            Self::Copy { .. } => "CopyWebpackPlugin",
        }
    }
}

/// Options for the landing-page document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlOptions {
    /// Output file name, relative to the output path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Template document.
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minify: Option<HtmlMinify>,
}

/// HTML minification switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMinify {
    pub remove_comments: bool,
    pub collapse_whitespace: bool,
    pub remove_attribute_quotes: bool,
}

impl HtmlMinify {
    /// Strip comments, collapse whitespace and drop redundant attribute quotes.
    pub fn full() -> Self {
        Self {
            remove_comments: true,
            collapse_whitespace: true,
            remove_attribute_quotes: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UglifyOptions {
    pub source_map: bool,
    pub comments: bool,
    pub compress: UglifyCompress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UglifyCompress {
    pub warnings: bool,
}

/// One copy instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyPattern {
    pub from: String,
    pub to: PathBuf,
}
