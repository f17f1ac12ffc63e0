//! The environment snapshot.
//!
//! The snapshot is taken once at startup and then passed by reference into
//! the resolver, so resolution never touches the process environment.

use std::fmt;

use serde::Serialize;

use super::distribution::Distribution;
use crate::error::{Result, WebpackEnvError};

/// Variable holding the build mode.
pub const NODE_ENV: &str = "NODE_ENV";
/// Variable holding the CDN switch.
pub const CDN: &str = "CDN";
/// Variable holding the distribution identifier.
pub const DISTRIBUTION: &str = "DISTRIBUTION";
/// Variable holding the platform identifier.
pub const PLATFORM: &str = "PLATFORM";
/// Variable holding the configuration variant.
pub const CONFIG: &str = "CONFIG";

/// Top-level build mode. Fixed for the lifetime of a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// `NODE_ENV=development`: source maps, dev server, no hashing.
    Development,
    /// Everything else: hashed, split, extracted and minified output.
    Production,
}

impl BuildMode {
    /// Derive the mode from a raw environment name. Unset means production.
    pub fn from_environment(name: Option<&str>) -> Self {
        if name == Some("development") {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Whether this is a debug (development) build.
    pub fn is_debug(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Immutable set of inputs for one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvSnapshot {
    /// Raw `NODE_ENV`, injected verbatim as the `ENVIRONMENT` constant.
    pub environment: Option<String>,
    /// Build mode derived from [`EnvSnapshot::environment`].
    pub mode: BuildMode,
    /// Serve static assets through a CDN.
    pub cdn: bool,
    /// Deployment target.
    pub distribution: Distribution,
    /// Rendering target within the distribution (e.g. `web`, `mobile`).
    pub platform: String,
    /// Configuration variant (e.g. `default`).
    pub configuration: Option<String>,
}

impl EnvSnapshot {
    /// Create a snapshot for the given environment name and target.
    ///
    /// CDN is off and no configuration variant is set.
    ///
    /// # Example
    ///
    /// ```
    /// use webpack_env::environment::{BuildMode, Distribution, EnvSnapshot};
    ///
    /// let env = EnvSnapshot::new("development", "teambition", "web");
    /// assert_eq!(env.mode, BuildMode::Development);
    /// assert_eq!(env.distribution, Distribution::Teambition);
    /// ```
    pub fn new(
        environment: impl Into<String>,
        distribution: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        let environment = environment.into();
        Self {
            mode: BuildMode::from_environment(Some(&environment)),
            environment: Some(environment),
            cdn: false,
            distribution: Distribution::from(distribution.into()),
            platform: platform.into(),
            configuration: None,
        }
    }

    /// Set the CDN switch.
    pub fn with_cdn(mut self, cdn: bool) -> Self {
        self.cdn = cdn;
        self
    }

    /// Set the configuration variant.
    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    /// Read the snapshot from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the snapshot through a custom variable lookup (for testing).
    ///
    /// Each variable is looked up exactly once. `DISTRIBUTION` and
    /// `PLATFORM` are required. `NODE_ENV` and `CONFIG` are kept as given,
    /// empty strings included; an unset `NODE_ENV` selects production.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup(NODE_ENV);
        let cdn = parse_flag(lookup(CDN).as_deref());
        let distribution = required(&lookup, DISTRIBUTION)?;
        let platform = required(&lookup, PLATFORM)?;
        let configuration = lookup(CONFIG);

        let snapshot = Self {
            mode: BuildMode::from_environment(environment.as_deref()),
            environment,
            cdn,
            distribution: Distribution::from(distribution),
            platform,
            configuration,
        };

        tracing::debug!(
            mode = %snapshot.mode,
            cdn = snapshot.cdn,
            distribution = %snapshot.distribution,
            platform = %snapshot.platform,
            "Captured environment snapshot"
        );
        Ok(snapshot)
    }

    /// Output tree name: `<distribution>-<platform>`.
    pub fn target(&self) -> String {
        format!("{}-{}", self.distribution, self.platform)
    }

    /// Whether the configuration variant equals `name`.
    pub fn configuration_is(&self, name: &str) -> bool {
        self.configuration.as_deref() == Some(name)
    }
}

/// A boolean-as-string flag is set only by the exact value `"true"`.
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

fn required<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| WebpackEnvError::MissingVariable {
            name: name.to_string(),
        })
}
