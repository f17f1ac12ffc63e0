//! The configuration value handed to the bundler.
//!
//! These types describe a webpack 1.x configuration as data. Loaders and
//! plugins are referenced by name with their options; their behaviour
//! belongs to the bundler.
//!
//! - [`config`] - the top-level [`WebpackConfig`] and its sections
//! - [`rule`] - module rules and `!`-joined loader chains
//! - [`plugin`] - plugin descriptors
//!
//! Every section serializes with camelCase keys so the JSON output can be
//! consumed by the bundler without renaming.

pub mod config;
pub mod plugin;
pub mod rule;

pub use config::{
    DevServer, Entry, EntryPoint, FileLoader, ModuleConfig, Output, PostcssPlugin, Resolve,
    Stats, TsOptions, VueLoaders, VueOptions, WebpackConfig,
};
pub use plugin::{CopyPattern, HtmlMinify, HtmlOptions, Plugin, UglifyCompress, UglifyOptions};
pub use rule::{ExtractedChain, LoaderChain, ModuleRule, RuleUse};
