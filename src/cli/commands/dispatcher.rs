//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, EnvArgs, ResolveArgs};
use crate::config::load_settings;
use crate::error::Result;
use crate::resolver::Resolver;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for payloads and status output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] with the exit code. Failures surface as errors.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Build a resolver for `project_root`, honouring its settings file.
pub fn load_resolver(project_root: &Path) -> Result<Resolver> {
    let settings = load_settings(project_root)?;
    Ok(Resolver::new(project_root).with_settings(settings))
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::PublicPath(args)) => {
                let cmd = super::public_path::PublicPathCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Paths(args)) => {
                let cmd = super::paths::PathsCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Clean(args)) => {
                let cmd = super::clean::CleanCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Schema) => super::schema::SchemaCommand.execute(ui),
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // No subcommand means clap never saw the env-backed flags.
                let args = ResolveArgs {
                    env: EnvArgs::from_process_env(),
                    ..Default::default()
                };
                let cmd = super::resolve::ResolveCommand::new(&self.project_root, args);
                cmd.execute(ui)
            }
        }
    }
}
