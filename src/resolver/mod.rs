//! Build configuration resolution.
//!
//! Resolution runs in three stages:
//!
//! 1. [`base`] - entry, output, module rules and constants shared by both modes
//! 2. [`development`] or [`production`] - exactly one, chosen by [`BuildMode`]
//! 3. Inside production, [`public_path`] picks the asset URL prefix
//!
//! [`Resolver::resolve`] is pure. [`Resolver::run`] additionally removes the
//! previous output tree before a production build.
//!
//! # Example
//!
//! ```
//! use webpack_env::environment::EnvSnapshot;
//! use webpack_env::resolver::Resolver;
//!
//! let env = EnvSnapshot::new("production", "wechat", "mobile").with_configuration("default");
//! let config = Resolver::new("/project").resolve(&env);
//! assert_eq!(config.output.public_path.as_deref(), Some("/weixin/static/"));
//! ```

pub mod base;
pub mod development;
pub mod paths;
pub mod production;
pub mod public_path;
pub mod vendor;

pub use paths::TargetPaths;
pub use public_path::{public_path_for, resolve_public_path, PublicPath};

use std::path::{Path, PathBuf};

use crate::clean::{clean_target, CleanOutcome};
use crate::config::Settings;
use crate::environment::{BuildMode, EnvSnapshot};
use crate::error::Result;
use crate::webpack::WebpackConfig;

/// Resolves configurations for one project.
#[derive(Debug, Clone)]
pub struct Resolver {
    project_root: PathBuf,
    settings: Settings,
}

impl Resolver {
    /// Create a resolver for `project_root` with the default layout.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            settings: Settings::default(),
        }
    }

    /// Use the given project layout.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the project layout settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Locations derived for a snapshot.
    pub fn paths(&self, env: &EnvSnapshot) -> TargetPaths {
        TargetPaths::for_env(&self.settings, env)
    }

    /// Produce the configuration for `env` without touching the filesystem.
    pub fn resolve(&self, env: &EnvSnapshot) -> WebpackConfig {
        let paths = self.paths(env);
        tracing::debug!(
            entry = %paths.entry,
            output = %paths.output_dir,
            mode = %env.mode,
            "Resolving build configuration"
        );

        let config = base::assemble(env, &paths, &self.project_root);
        match env.mode {
            BuildMode::Development => {
                development::apply(config, &paths, &self.settings.dev_server)
            }
            BuildMode::Production => production::apply(config, env, &paths, &self.project_root),
        }
    }

    /// Resolve, then remove the previous output tree for production builds.
    ///
    /// # Errors
    ///
    /// Returns `CleanFailed` if the previous output exists but cannot be
    /// removed.
    pub fn run(&self, env: &EnvSnapshot) -> Result<WebpackConfig> {
        let config = self.resolve(env);
        if env.mode == BuildMode::Production {
            self.clean(env)?;
        }
        Ok(config)
    }

    /// Remove the previous output tree for `env`'s target.
    ///
    /// # Errors
    ///
    /// Returns `UnsafeCleanPath` if the distribution or platform would
    /// place the target outside the output root.
    pub fn clean(&self, env: &EnvSnapshot) -> Result<CleanOutcome> {
        clean_target(
            &self.project_root,
            &self.settings.dist_root,
            &self.paths(env).target,
        )
    }
}
