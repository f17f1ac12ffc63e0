//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::error::{Result, WebpackEnvError};

/// Settings file name, looked up in the project root.
pub const SETTINGS_FILE: &str = ".webpack-env.yml";

/// Path of the settings file for `project_root`, if it exists.
pub fn find_settings_file(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(SETTINGS_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load the project settings, falling back to defaults when no file exists.
///
/// # Errors
///
/// Returns `SettingsParseError` if the YAML is invalid.
pub fn load_settings(project_root: &Path) -> Result<Settings> {
    match find_settings_file(project_root) {
        Some(path) => load_settings_file(&path),
        None => {
            tracing::debug!("No {} found, using default settings", SETTINGS_FILE);
            Ok(Settings::default())
        }
    }
}

/// Load a single settings file.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    tracing::debug!("Loading settings from {}", path.display());
    parse_settings(&content, path)
}

/// Parse YAML content into [`Settings`].
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| WebpackEnvError::SettingsParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
