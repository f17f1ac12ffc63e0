//! Production branch.
//!
//! Each step is a `WebpackConfig -> WebpackConfig` function; [`apply`]
//! runs them in order.

use std::path::Path;

use super::base::STYLUS_PROBE;
use super::paths::TargetPaths;
use super::public_path::public_path_for;
use super::vendor;
use crate::environment::{Distribution, EnvSnapshot};
use crate::webpack::{
    CopyPattern, FileLoader, HtmlMinify, HtmlOptions, Plugin, PostcssPlugin, RuleUse, Stats,
    UglifyCompress, UglifyOptions, WebpackConfig,
};

/// Chunk file name pattern with a content hash.
pub const HASHED_FILENAME: &str = "[name].[chunkhash].js";

/// Extracted stylesheet file name pattern.
pub const EXTRACTED_CSS_FILENAME: &str = "[name].[chunkhash].css";

/// Chunks smaller than this are merged.
pub const MIN_CHUNK_SIZE: u64 = 1024 * 200;

/// Image used by the dingtalk share integration.
pub const DINGTALK_SHARE_IMAGE: &str = "./src/images/teambition.png";

/// Apply the production-only settings.
pub fn apply(
    config: WebpackConfig,
    env: &EnvSnapshot,
    paths: &TargetPaths,
    project_root: &Path,
) -> WebpackConfig {
    tracing::debug!(output_tree = %paths.target, cdn = env.cdn, "Applying production settings");

    let config = config.with_output_filename(HASHED_FILENAME);
    let config = apply_public_path(config, env);
    let config = split_vendors(config, paths);
    let config = ignore_moment_locales(config);
    let config = extract_stylesheets(config);
    let config = config.with_postcss(PostcssPlugin::Cssnano { safe: true });
    let config = landing_page(config, env, paths);
    let config = optimize(config).with_stats(Stats::essentials());
    copy_platform_assets(config, env, paths, project_root)
}

fn apply_public_path(config: WebpackConfig, env: &EnvSnapshot) -> WebpackConfig {
    let public_path = public_path_for(env);
    let config = config.with_public_path(public_path.output);
    match public_path.file_loader {
        Some(path) => config.with_file_loader(FileLoader { public_path: path }),
        None => config,
    }
}

fn split_vendors(config: WebpackConfig, paths: &TargetPaths) -> WebpackConfig {
    config
        .with_entry(vendor::split_entry(&paths.entry))
        .with_plugin(vendor::commons_chunk())
}

/// Keep moment's locale data out of the bundle.
fn ignore_moment_locales(config: WebpackConfig) -> WebpackConfig {
    config.with_plugin(Plugin::Ignore {
        resource_reg_exp: r"^\./locale$".to_string(),
        context_reg_exp: "moment$".to_string(),
    })
}

/// Emit stylus output as standalone CSS files instead of inline styles.
fn extract_stylesheets(mut config: WebpackConfig) -> WebpackConfig {
    config.vue.loaders.stylus = config.vue.loaders.stylus.extracted();
    config
        .map_first_rule_matching(STYLUS_PROBE, RuleUse::extracted)
        .with_plugin(Plugin::ExtractText {
            filename: EXTRACTED_CSS_FILENAME.to_string(),
        })
}

fn landing_page(config: WebpackConfig, env: &EnvSnapshot, paths: &TargetPaths) -> WebpackConfig {
    let filename = match env.distribution {
        Distribution::Wechat => "../index.html".to_string(),
        _ => format!("../{}.html", paths.target),
    };
    config.with_plugin(Plugin::Html(HtmlOptions {
        filename: Some(filename),
        template: paths.template.clone(),
        minify: Some(HtmlMinify::full()),
    }))
}

fn optimize(config: WebpackConfig) -> WebpackConfig {
    config.with_plugins([
        Plugin::Dedupe,
        Plugin::MinChunkSize {
            min_chunk_size: MIN_CHUNK_SIZE,
        },
        Plugin::OccurrenceOrder { prefer_entry: true },
        Plugin::UglifyJs(UglifyOptions {
            source_map: false,
            comments: false,
            compress: UglifyCompress { warnings: false },
        }),
    ])
}

/// Dingtalk needs the share image inside its offline package.
fn copy_platform_assets(
    config: WebpackConfig,
    env: &EnvSnapshot,
    paths: &TargetPaths,
    project_root: &Path,
) -> WebpackConfig {
    match env.distribution {
        Distribution::Dingtalk => config.with_plugin(Plugin::Copy {
            patterns: vec![CopyPattern {
                from: DINGTALK_SHARE_IMAGE.to_string(),
                to: paths
                    .output_path(project_root)
                    .join("images")
                    .join("teambition.png"),
            }],
        }),
        _ => config,
    }
}
