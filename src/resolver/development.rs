//! Development branch.

use super::paths::TargetPaths;
use crate::config::DevServerSettings;
use crate::webpack::{DevServer, HtmlOptions, Plugin, Stats, WebpackConfig};

/// Source-map mode readable in browser dev tools.
pub const DEVTOOL: &str = "cheap-module-source-map";

/// Apply the development-only settings.
///
/// Adds readable source maps and skips emitting bundles with errors. The
/// landing page comes unminified from the entry's template, and the local
/// dev server logs terse stats.
pub fn apply(
    config: WebpackConfig,
    paths: &TargetPaths,
    dev_server: &DevServerSettings,
) -> WebpackConfig {
    tracing::debug!(
        host = %dev_server.host,
        port = dev_server.port,
        "Applying development settings"
    );

    config
        .with_devtool(DEVTOOL)
        .with_plugins([
            Plugin::NoErrors,
            Plugin::Html(HtmlOptions {
                filename: None,
                template: paths.template.clone(),
                minify: None,
            }),
        ])
        .with_stats(Stats::quiet())
        .with_dev_server(DevServer {
            stats: Stats::quiet(),
            host: dev_server.host.clone(),
            port: dev_server.port,
        })
}
