//! webpack-env - Environment-driven bundler configuration.
//!
//! webpack-env turns a handful of environment variables (`NODE_ENV`, `CDN`,
//! `DISTRIBUTION`, `PLATFORM`, `CONFIG`) into the complete configuration a
//! webpack build consumes: entry points, output naming, loader chains,
//! plugins and the public asset path for each deployment target.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`clean`] - Removal of previous build output
//! - [`config`] - Project layout settings
//! - [`environment`] - The environment snapshot and distributions
//! - [`error`] - Error types and result aliases
//! - [`resolver`] - Configuration resolution
//! - [`ui`] - Terminal output
//! - [`webpack`] - The bundler configuration model
//!
//! # Example
//!
//! ```
//! use webpack_env::environment::EnvSnapshot;
//! use webpack_env::resolver::Resolver;
//!
//! let env = EnvSnapshot::new("development", "teambition", "web");
//! let config = Resolver::new("/project").resolve(&env);
//!
//! assert_eq!(config.output.filename, "[name].js");
//! assert_eq!(config.dev_server.map(|d| d.port), Some(8081));
//! ```

pub mod clean;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod resolver;
pub mod ui;
pub mod webpack;

pub use error::{Result, WebpackEnvError};
