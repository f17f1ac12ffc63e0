//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running the binary without a
//! subcommand resolves the configuration from the process environment.

pub mod clean;
pub mod completions;
pub mod dispatcher;
pub mod paths;
pub mod public_path;
pub mod resolve;
pub mod schema;

pub use dispatcher::{load_resolver, Command, CommandDispatcher, CommandResult};
