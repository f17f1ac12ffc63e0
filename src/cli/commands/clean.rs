//! Clean command implementation.
//!
//! The `webpack-env clean` command removes a target's previous output tree
//! without resolving a configuration.

use std::path::{Path, PathBuf};

use crate::clean::CleanOutcome;
use crate::cli::args::TargetArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{load_resolver, Command, CommandResult};

/// The clean command implementation.
pub struct CleanCommand {
    project_root: PathBuf,
    args: TargetArgs,
}

impl CleanCommand {
    /// Create a new clean command.
    pub fn new(project_root: &Path, args: TargetArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for CleanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = self.args.env.snapshot()?;
        let resolver = load_resolver(&self.project_root)?;
        let dir = resolver.paths(&env).clean_dir;

        match resolver.clean(&env)? {
            CleanOutcome::Removed => ui.success(&format!("Removed {}", dir)),
            CleanOutcome::AlreadyAbsent => ui.message(&format!("Nothing to clean at {}", dir)),
        }

        Ok(CommandResult::success())
    }
}
