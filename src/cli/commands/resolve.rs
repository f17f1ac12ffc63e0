//! Resolve command implementation.
//!
//! The `webpack-env resolve` command captures the environment, resolves the
//! bundler configuration and prints it (or writes it to a file).

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::error::{Result, WebpackEnvError};
use crate::ui::UserInterface;
use crate::webpack::WebpackConfig;

use super::dispatcher::{load_resolver, Command, CommandResult};

/// Serialization format for the resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    fn from_args(args: &ResolveArgs) -> Self {
        if args.yaml {
            Self::Yaml
        } else {
            Self::Json
        }
    }
}

/// Serialize `config` in the given format.
pub fn render_config(config: &WebpackConfig, format: ConfigFormat) -> Result<String> {
    let rendered = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
    };
    rendered.map_err(|message| WebpackEnvError::Serialize { message })
}

/// The resolve command implementation.
pub struct ResolveCommand {
    project_root: PathBuf,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(project_root: &Path, args: ResolveArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn write_output(&self, path: &Path, rendered: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, rendered)?;
        Ok(())
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = self.args.env.snapshot()?;
        let resolver = load_resolver(&self.project_root)?;

        let config = if self.args.no_clean {
            resolver.resolve(&env)
        } else {
            resolver.run(&env)?
        };

        let rendered = render_config(&config, ConfigFormat::from_args(&self.args))?;

        match &self.args.output {
            Some(path) => {
                self.write_output(path, &rendered)?;
                ui.success(&format!(
                    "Wrote {} configuration for {} to {}",
                    env.mode,
                    env.target(),
                    path.display()
                ));
            }
            None => ui.emit(rendered.trim_end()),
        }

        if ui.output_mode().shows_details() {
            ui.key_value("mode", &env.mode.to_string());
            ui.key_value("target", &env.target());
            ui.key_value("plugins", &config.plugin_names().join(", "));
        }

        Ok(CommandResult::success())
    }
}
