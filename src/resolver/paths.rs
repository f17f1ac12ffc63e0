//! Derived locations.
//!
//! All paths are pure functions of the distribution and platform (plus the
//! project layout settings). They do not depend on the build mode.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Settings;
use crate::environment::{Distribution, EnvSnapshot};

/// Locations derived from a distribution/platform pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetPaths {
    /// Entry module directory: `<entry_root>/<distribution>/<platform>`.
    pub entry: String,
    /// Landing-page template: `<entry>/index.html`.
    pub template: String,
    /// Output tree name: `<distribution>-<platform>`.
    pub target: String,
    /// Asset output directory: `<dist_root>/<target>/static/`.
    pub output_dir: String,
    /// Directory removed before a production build: `<dist_root>/<target>`.
    pub clean_dir: String,
}

impl TargetPaths {
    /// Derive the locations for `distribution` and `platform`.
    ///
    /// # Example
    ///
    /// ```
    /// use webpack_env::config::Settings;
    /// use webpack_env::environment::Distribution;
    /// use webpack_env::resolver::TargetPaths;
    ///
    /// let paths = TargetPaths::derive(&Settings::default(), &Distribution::Wechat, "mobile");
    /// assert_eq!(paths.entry, "./src/platforms/wechat/mobile");
    /// assert_eq!(paths.output_dir, "dist/wechat-mobile/static/");
    /// ```
    pub fn derive(settings: &Settings, distribution: &Distribution, platform: &str) -> Self {
        let entry_root = settings.entry_root.trim_end_matches('/');
        let dist_root = settings.dist_root.trim_end_matches('/');

        let entry = format!("{}/{}/{}", entry_root, distribution, platform);
        let target = format!("{}-{}", distribution, platform);

        Self {
            template: format!("{}/index.html", entry),
            output_dir: format!("{}/{}/static/", dist_root, target),
            clean_dir: format!("{}/{}", dist_root, target),
            entry,
            target,
        }
    }

    /// Derive the locations for a snapshot.
    pub fn for_env(settings: &Settings, env: &EnvSnapshot) -> Self {
        Self::derive(settings, &env.distribution, &env.platform)
    }

    /// Absolute asset output directory under `project_root`.
    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output_dir)
    }
}
