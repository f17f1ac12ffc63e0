//! Base assembly.
//!
//! Builds the configuration shared by both build modes. Mode only shows
//! through the `DEBUG` constant and the url loader's inline size limit.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::json;

use super::paths::TargetPaths;
use crate::environment::EnvSnapshot;
use crate::webpack::{
    Entry, ModuleConfig, ModuleRule, Output, Plugin, PostcssPlugin, Resolve, RuleUse, TsOptions,
    VueLoaders, VueOptions, WebpackConfig,
};

/// Loader chain for stylus stylesheets, standalone or inside components.
pub const STYLUS_CHAIN: &str = "style!css?sourceMap!postcss!stylus";

/// File probed to locate the preprocessed-stylesheet rule.
pub const STYLUS_PROBE: &str = ".styl";

/// Images below this many bytes are inlined in production builds.
const URL_INLINE_LIMIT: u64 = 10_000;

/// Browser queries handed to autoprefixer.
const BROWSERS: &[&str] = &["> 1%", "last 3 versions", "Android >= 4.0"];

/// Assemble the mode-independent configuration.
pub fn assemble(env: &EnvSnapshot, paths: &TargetPaths, project_root: &Path) -> WebpackConfig {
    WebpackConfig {
        entry: Entry::Single(paths.entry.clone()),
        output: Output {
            path: paths.output_path(project_root),
            filename: "[name].js".to_string(),
            public_path: None,
        },
        resolve: resolve_options(project_root),
        module: ModuleConfig {
            pre_loaders: vec![ModuleRule::new(r"\.ts$", "tslint")],
            loaders: loader_rules(env),
        },
        vue: VueOptions {
            loaders: VueLoaders {
                stylus: RuleUse::chain(STYLUS_CHAIN),
            },
        },
        ts: TsOptions {
            config_file_name: "./tools/build/dev.json".to_string(),
            silent: true,
        },
        postcss: vec![PostcssPlugin::Autoprefixer {
            browsers: BROWSERS.iter().map(|b| b.to_string()).collect(),
        }],
        plugins: vec![define_plugin(env)],
        devtool: None,
        dev_server: None,
        stats: None,
        file_loader: None,
    }
}

fn resolve_options(project_root: &Path) -> Resolve {
    let node_modules = project_root.join("node_modules");
    Resolve {
        extensions: ["", ".js", ".ts", ".vue", ".styl", ".css"]
            .iter()
            .map(|e| e.to_string())
            .collect(),
        fallback: vec![node_modules.clone()],
        alias: BTreeMap::from([
            (
                "tslib".to_string(),
                node_modules.join("tslib").join("tslib.js"),
            ),
            ("src".to_string(), project_root.join("src")),
            ("rxjs".to_string(), node_modules.join("rxjs")),
        ]),
    }
}

/// One rule per file category. Order matters: the production branch
/// rewrites the first rule matching [`STYLUS_PROBE`].
fn loader_rules(env: &EnvSnapshot) -> Vec<ModuleRule> {
    let inline_limit = if env.mode.is_debug() {
        0
    } else {
        URL_INLINE_LIMIT
    };
    let sprite = format!("svg-sprite?{}", json!({ "name": "icon-[name]" }));

    vec![
        ModuleRule::new(r"\.ts$", "ts"),
        ModuleRule::new(r"\.vue$", "vue"),
        ModuleRule::new(r"\.json$", "json"),
        ModuleRule::new(r"\.html$", "vue-html"),
        ModuleRule::new(r"\.js$", "babel").with_exclude("node_modules"),
        ModuleRule::new(r"\.styl$", STYLUS_CHAIN),
        ModuleRule::new(r"\.css$", "style!css!postcss"),
        ModuleRule::new(r"\.svg$", &sprite).with_include("node_modules/tb-icons/lib/svgs"),
        ModuleRule::new(r"\.(png|jpg|gif)(\?.*)?$", "url").with_query(json!({
            "limit": inline_limit,
            "name": "images/[name].[ext]?[hash:7]",
        })),
    ]
}

/// Compile-time constants. Values are JavaScript expressions.
fn define_plugin(env: &EnvSnapshot) -> Plugin {
    Plugin::Define {
        definitions: BTreeMap::from([
            ("DEBUG".to_string(), env.mode.is_debug().to_string()),
            (
                "ENVIRONMENT".to_string(),
                optional_literal(env.environment.as_deref()),
            ),
            ("DISTRIBUTION".to_string(), literal(env.distribution.as_str())),
            ("PLATFORM".to_string(), literal(&env.platform)),
            (
                "CONFIGURATION".to_string(),
                optional_literal(env.configuration.as_deref()),
            ),
        ]),
    }
}

fn literal(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

/// An unset variable is the expression `undefined`.
fn optional_literal(value: Option<&str>) -> String {
    value.map_or_else(|| "undefined".to_string(), literal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use std::path::PathBuf;

    fn assemble_for(env: &EnvSnapshot) -> WebpackConfig {
        let paths = TargetPaths::for_env(&Settings::default(), env);
        assemble(env, &paths, Path::new("/project"))
    }

    fn definitions(config: &WebpackConfig) -> &BTreeMap<String, String> {
        match &config.plugins[0] {
            Plugin::Define { definitions } => definitions,
            other => panic!("Expected DefinePlugin, got {}", other.name()),
        }
    }

    #[test]
    fn entry_and_output_follow_paths() {
        let config = assemble_for(&EnvSnapshot::new("production", "cms", "web"));
        assert_eq!(config.entry, Entry::Single("./src/platforms/cms/web".to_string()));
        assert_eq!(
            config.output.path,
            PathBuf::from("/project/dist/cms-web/static/")
        );
        assert_eq!(config.output.filename, "[name].js");
        assert_eq!(config.output.public_path, None);
    }

    #[test]
    fn loader_rules_cover_every_category_in_order() {
        let config = assemble_for(&EnvSnapshot::new("production", "cms", "web"));
        let probes = [
            "a.ts", "a.vue", "a.json", "a.html", "a.js", "a.styl", "a.css", "a.svg", "a.png",
        ];
        assert_eq!(config.module.loaders.len(), probes.len());
        for (rule, probe) in config.module.loaders.iter().zip(probes) {
            assert!(rule.matches(probe), "{} should match {}", rule.test, probe);
        }
    }

    #[test]
    fn one_rule_per_extension() {
        let config = assemble_for(&EnvSnapshot::new("production", "cms", "web"));
        for probe in ["a.ts", "a.styl", "a.css", "a.jpg?v=1"] {
            let hits = config
                .module
                .loaders
                .iter()
                .filter(|r| r.matches(probe))
                .count();
            assert_eq!(hits, 1, "{probe}");
        }
    }

    #[test]
    fn script_rule_excludes_dependencies() {
        let config = assemble_for(&EnvSnapshot::new("production", "cms", "web"));
        let rule = config.rule_for("a.js").unwrap();
        assert_eq!(rule.exclude.as_deref(), Some("node_modules"));
    }

    #[test]
    fn icon_rule_is_limited_to_icon_package() {
        let config = assemble_for(&EnvSnapshot::new("production", "cms", "web"));
        let rule = config.rule_for("a.svg").unwrap();
        assert_eq!(rule.include.as_deref(), Some("node_modules/tb-icons/lib/svgs"));
        assert_eq!(
            serde_json::to_value(&rule.use_).unwrap(),
            serde_json::json!(r#"svg-sprite?{"name":"icon-[name]"}"#)
        );
    }

    #[test]
    fn url_limit_depends_on_mode() {
        let dev = assemble_for(&EnvSnapshot::new("development", "cms", "web"));
        let prod = assemble_for(&EnvSnapshot::new("production", "cms", "web"));
        let limit = |c: &WebpackConfig| c.rule_for("a.png").unwrap().query.clone().unwrap()["limit"].clone();
        assert_eq!(limit(&dev), 0);
        assert_eq!(limit(&prod), 10_000);
    }

    #[test]
    fn aliases_point_into_project() {
        let config = assemble_for(&EnvSnapshot::new("production", "cms", "web"));
        assert_eq!(
            config.resolve.alias["tslib"],
            PathBuf::from("/project/node_modules/tslib/tslib.js")
        );
        assert_eq!(config.resolve.alias["src"], PathBuf::from("/project/src"));
        assert_eq!(
            config.resolve.alias["rxjs"],
            PathBuf::from("/project/node_modules/rxjs")
        );
    }

    #[test]
    fn defines_compile_time_constants() {
        let env = EnvSnapshot::new("production", "wechat", "mobile").with_configuration("default");
        let config = assemble_for(&env);
        let defs = definitions(&config);
        assert_eq!(defs["DEBUG"], "false");
        assert_eq!(defs["ENVIRONMENT"], "\"production\"");
        assert_eq!(defs["DISTRIBUTION"], "\"wechat\"");
        assert_eq!(defs["PLATFORM"], "\"mobile\"");
        assert_eq!(defs["CONFIGURATION"], "\"default\"");
    }

    #[test]
    fn missing_configuration_is_undefined() {
        let config = assemble_for(&EnvSnapshot::new("development", "cms", "web"));
        let defs = definitions(&config);
        assert_eq!(defs["DEBUG"], "true");
        assert_eq!(defs["CONFIGURATION"], "undefined");
    }

    #[test]
    fn unset_node_env_is_undefined() {
        let env = EnvSnapshot::from_lookup(|key| match key {
            "DISTRIBUTION" => Some("cms".to_string()),
            "PLATFORM" => Some("web".to_string()),
            _ => None,
        })
        .unwrap();
        let config = assemble_for(&env);
        let defs = definitions(&config);
        assert_eq!(defs["DEBUG"], "false");
        assert_eq!(defs["ENVIRONMENT"], "undefined");
        assert_eq!(defs["CONFIGURATION"], "undefined");
    }

    #[test]
    fn empty_values_are_empty_string_literals() {
        let env = EnvSnapshot::from_lookup(|key| match key {
            "NODE_ENV" | "CONFIG" => Some(String::new()),
            "DISTRIBUTION" => Some("cms".to_string()),
            "PLATFORM" => Some("web".to_string()),
            _ => None,
        })
        .unwrap();
        let defs = definitions(&assemble_for(&env)).clone();
        assert_eq!(defs["ENVIRONMENT"], "\"\"");
        assert_eq!(defs["CONFIGURATION"], "\"\"");
    }

    #[test]
    fn auxiliary_tool_settings() {
        let config = assemble_for(&EnvSnapshot::new("production", "cms", "web"));
        assert_eq!(config.vue.loaders.stylus, RuleUse::chain(STYLUS_CHAIN));
        assert_eq!(config.ts.config_file_name, "./tools/build/dev.json");
        assert!(config.ts.silent);
        assert_eq!(config.postcss.len(), 1);
        assert_eq!(config.module.pre_loaders[0].test, r"\.ts$");
    }
}
