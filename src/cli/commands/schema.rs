//! Schema command implementation.
//!
//! The `webpack-env schema` command prints the JSON schema of the
//! `.webpack-env.yml` settings file, for editor integration.

use crate::config::Settings;
use crate::error::{Result, WebpackEnvError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = schemars::schema_for!(Settings);
        let rendered =
            serde_json::to_string_pretty(&schema).map_err(|e| WebpackEnvError::Serialize {
                message: e.to_string(),
            })?;
        ui.emit(&rendered);
        Ok(CommandResult::success())
    }
}
