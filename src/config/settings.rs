//! Project settings schema.
//!
//! Settings describe the project layout. They never change the public
//! path table or the vendor groups.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root structure of `.webpack-env.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `<distribution>/<platform>/` entry modules.
    pub entry_root: String,

    /// Directory receiving `<distribution>-<platform>/` output trees.
    pub dist_root: String,

    /// Development server binding.
    pub dev_server: DevServerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            entry_root: default_entry_root(),
            dist_root: default_dist_root(),
            dev_server: DevServerSettings::default(),
        }
    }
}

fn default_entry_root() -> String {
    "./src/platforms".to_string()
}

fn default_dist_root() -> String {
    "dist".to_string()
}

/// Host and port for the development server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DevServerSettings {
    /// Interface to bind; `0.0.0.0` binds all interfaces.
    pub host: String,

    /// TCP port.
    pub port: u16,
}

impl Default for DevServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
        }
    }
}
