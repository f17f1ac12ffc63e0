//! Project settings.
//!
//! The resolver's inputs come from the environment; the project layout it
//! resolves against comes from an optional `.webpack-env.yml` in the
//! project root:
//!
//! ```yaml
//! entry_root: ./src/platforms
//! dist_root: dist
//! dev_server:
//!   host: 0.0.0.0
//!   port: 8081
//! ```
//!
//! Every key is optional.
//!
//! # Example
//!
//! ```
//! use webpack_env::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".webpack-env.yml"), "dist_root: build").unwrap();
//!
//! let settings = load_settings(temp.path()).unwrap();
//! assert_eq!(settings.dist_root, "build");
//! assert_eq!(settings.dev_server.port, 8081);
//! ```

pub mod loader;
pub mod settings;

pub use loader::{
    find_settings_file, load_settings, load_settings_file, parse_settings, SETTINGS_FILE,
};
pub use settings::{DevServerSettings, Settings};
