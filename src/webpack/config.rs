//! Top-level configuration value.
//!
//! [`WebpackConfig`] is built once per invocation. Every `with_*` method
//! consumes the value and returns the updated one, so each resolution
//! branch is a plain `WebpackConfig -> WebpackConfig` function.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use super::plugin::Plugin;
use super::rule::{ModuleRule, RuleUse};

/// The full configuration consumed by the bundler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebpackConfig {
    pub entry: Entry,
    pub output: Output,
    pub resolve: Resolve,
    pub module: ModuleConfig,
    pub vue: VueOptions,
    pub ts: TsOptions,
    pub postcss: Vec<PostcssPlugin>,
    pub plugins: Vec<Plugin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_loader: Option<FileLoader>,
}

impl WebpackConfig {
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entry = entry;
        self
    }

    pub fn with_output_filename(mut self, filename: impl Into<String>) -> Self {
        self.output.filename = filename.into();
        self
    }

    pub fn with_public_path(mut self, public_path: impl Into<String>) -> Self {
        self.output.public_path = Some(public_path.into());
        self
    }

    pub fn with_plugin(mut self, plugin: Plugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn with_plugins(mut self, plugins: impl IntoIterator<Item = Plugin>) -> Self {
        self.plugins.extend(plugins);
        self
    }

    pub fn with_postcss(mut self, plugin: PostcssPlugin) -> Self {
        self.postcss.push(plugin);
        self
    }

    pub fn with_devtool(mut self, devtool: impl Into<String>) -> Self {
        self.devtool = Some(devtool.into());
        self
    }

    pub fn with_dev_server(mut self, dev_server: DevServer) -> Self {
        self.dev_server = Some(dev_server);
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_file_loader(mut self, file_loader: FileLoader) -> Self {
        self.file_loader = Some(file_loader);
        self
    }

    /// Replace the use of the first loader rule whose test matches `path`.
    ///
    /// Later rules are left alone even if they also match. Without a
    /// matching rule the configuration is returned unchanged.
    pub fn map_first_rule_matching<F>(mut self, path: &str, f: F) -> Self
    where
        F: FnOnce(RuleUse) -> RuleUse,
    {
        if let Some(rule) = self.module.loaders.iter_mut().find(|r| r.matches(path)) {
            let use_ = std::mem::replace(&mut rule.use_, RuleUse::Chain(Default::default()));
            rule.use_ = f(use_);
        }
        self
    }

    /// The first loader rule whose test matches `path`.
    pub fn rule_for(&self, path: &str) -> Option<&ModuleRule> {
        self.module.loaders.iter().find(|r| r.matches(path))
    }

    /// Plugin class names in registration order.
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(Plugin::name).collect()
    }

    /// Whether a plugin with the given class name is registered.
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }
}

/// Entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// A single application entry module.
    Single(String),
    /// Named chunks, each an entry module or a list of modules.
    Named(BTreeMap<String, EntryPoint>),
}

impl Entry {
    /// Names of the entry chunks; a single entry is reported as `main`.
    pub fn chunk_names(&self) -> Vec<&str> {
        match self {
            Self::Single(_) => vec!["main"],
            Self::Named(map) => map.keys().map(String::as_str).collect(),
        }
    }
}

/// One named entry chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryPoint {
    Module(String),
    Modules(Vec<String>),
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Absolute output directory.
    pub path: PathBuf,
    /// Chunk file name pattern.
    pub filename: String,
    /// URL prefix for emitted assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

/// Module resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolve {
    pub extensions: Vec<String>,
    pub fallback: Vec<PathBuf>,
    /// Package name to concrete location, so shared libraries resolve to a
    /// single instance across the dependency graph.
    pub alias: BTreeMap<String, PathBuf>,
}

/// Module rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConfig {
    /// Linters, run before the loaders.
    pub pre_loaders: Vec<ModuleRule>,
    /// One rule per file category, in order.
    pub loaders: Vec<ModuleRule>,
}

/// Loader overrides for languages embedded in component files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VueOptions {
    pub loaders: VueLoaders,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VueLoaders {
    pub stylus: RuleUse,
}

/// Type-checker options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsOptions {
    pub config_file_name: String,
    pub silent: bool,
}

/// A CSS post-processing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin", rename_all = "lowercase")]
pub enum PostcssPlugin {
    /// Vendor prefixing for the listed browser queries.
    Autoprefixer { browsers: Vec<String> },
    /// CSS minification.
    Cssnano { safe: bool },
}

/// Development server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServer {
    pub stats: Stats,
    pub host: String,
    pub port: u16,
}

/// Build statistics reporting. Unset fields keep the bundler defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_modules: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_sort: Option<String>,
}

impl Stats {
    /// Suppress everything but asset names.
    pub fn quiet() -> Self {
        Self {
            hash: Some(false),
            version: Some(false),
            timings: Some(false),
            assets: Some(false),
            chunk_modules: Some(false),
            children: Some(false),
            assets_sort: None,
        }
    }

    /// Keep essentials, sorted by chunk.
    pub fn essentials() -> Self {
        Self {
            children: Some(false),
            assets_sort: Some("chunks".to_string()),
            ..Self::default()
        }
    }
}

/// Public path override for assets emitted by the url/file loaders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileLoader {
    pub public_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> WebpackConfig {
        WebpackConfig {
            entry: Entry::Single("./src/platforms/cms/web".to_string()),
            output: Output {
                path: PathBuf::from("/project/dist/cms-web/static/"),
                filename: "[name].js".to_string(),
                public_path: None,
            },
            resolve: Resolve {
                extensions: vec![],
                fallback: vec![],
                alias: BTreeMap::new(),
            },
            module: ModuleConfig {
                pre_loaders: vec![],
                loaders: vec![
                    ModuleRule::new(r"\.styl$", "style!css!stylus"),
                    ModuleRule::new(r"\.(styl|css)$", "style!css"),
                ],
            },
            vue: VueOptions {
                loaders: VueLoaders {
                    stylus: RuleUse::chain("style!css!stylus"),
                },
            },
            ts: TsOptions {
                config_file_name: "tsconfig.json".to_string(),
                silent: true,
            },
            postcss: vec![],
            plugins: vec![],
            devtool: None,
            dev_server: None,
            stats: None,
            file_loader: None,
        }
    }

    #[test]
    fn builders_return_updated_value() {
        let config = minimal()
            .with_output_filename("[name].[chunkhash].js")
            .with_public_path("/static/")
            .with_plugin(Plugin::Dedupe)
            .with_devtool("eval");

        assert_eq!(config.output.filename, "[name].[chunkhash].js");
        assert_eq!(config.output.public_path.as_deref(), Some("/static/"));
        assert_eq!(config.plugin_names(), vec!["DedupePlugin"]);
        assert!(config.has_plugin("DedupePlugin"));
        assert_eq!(config.devtool.as_deref(), Some("eval"));
    }

    #[test]
    fn map_first_rule_only_touches_first_match() {
        let config = minimal().map_first_rule_matching(".styl", RuleUse::extracted);
        assert!(config.module.loaders[0].use_.is_extracted());
        assert!(!config.module.loaders[1].use_.is_extracted());
    }

    #[test]
    fn map_first_rule_without_match_is_unchanged() {
        let before = minimal();
        let after = before.clone().map_first_rule_matching(".png", RuleUse::extracted);
        assert_eq!(before, after);
    }

    #[test]
    fn unset_sections_are_omitted() {
        let json = serde_json::to_value(minimal()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("devtool"));
        assert!(!obj.contains_key("devServer"));
        assert!(!obj.contains_key("stats"));
        assert!(!obj.contains_key("fileLoader"));
        assert!(!json["output"].as_object().unwrap().contains_key("publicPath"));
    }

    #[test]
    fn named_entry_serializes_as_map() {
        let entry = Entry::Named(BTreeMap::from([
            (
                "main".to_string(),
                EntryPoint::Module("./src/platforms/cms/web".to_string()),
            ),
            (
                "vendor".to_string(),
                EntryPoint::Modules(vec!["vue".to_string()]),
            ),
        ]));
        assert_eq!(entry.chunk_names(), vec!["main", "vendor"]);
        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            json!({"main": "./src/platforms/cms/web", "vendor": ["vue"]})
        );
    }

    #[test]
    fn quiet_stats_suppress_details() {
        let json = serde_json::to_value(Stats::quiet()).unwrap();
        assert_eq!(
            json,
            json!({
                "hash": false,
                "version": false,
                "timings": false,
                "assets": false,
                "chunkModules": false,
                "children": false
            })
        );
    }

    #[test]
    fn essential_stats() {
        let json = serde_json::to_value(Stats::essentials()).unwrap();
        assert_eq!(json, json!({"children": false, "assetsSort": "chunks"}));
    }

    #[test]
    fn postcss_plugins_are_tagged() {
        let json = serde_json::to_value(PostcssPlugin::Cssnano { safe: true }).unwrap();
        assert_eq!(json, json!({"plugin": "cssnano", "safe": true}));
    }
}
