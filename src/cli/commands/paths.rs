//! Paths command implementation.
//!
//! The `webpack-env paths` command shows where a target's entry, template
//! and output live.

use std::path::{Path, PathBuf};

use crate::cli::args::TargetArgs;
use crate::error::{Result, WebpackEnvError};
use crate::ui::UserInterface;

use super::dispatcher::{load_resolver, Command, CommandResult};

/// The paths command implementation.
pub struct PathsCommand {
    project_root: PathBuf,
    args: TargetArgs,
}

impl PathsCommand {
    /// Create a new paths command.
    pub fn new(project_root: &Path, args: TargetArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for PathsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = self.args.env.snapshot()?;
        let resolver = load_resolver(&self.project_root)?;
        let paths = resolver.paths(&env);

        if self.args.json {
            let rendered = serde_json::to_string_pretty(&paths).map_err(|e| {
                WebpackEnvError::Serialize {
                    message: e.to_string(),
                }
            })?;
            ui.emit(&rendered);
        } else {
            for (key, value) in [
                ("entry", &paths.entry),
                ("template", &paths.template),
                ("target", &paths.target),
                ("output", &paths.output_dir),
                ("clean", &paths.clean_dir),
            ] {
                ui.emit(&format!("{}: {}", key, value));
            }
        }

        if ui.output_mode().shows_details() {
            ui.key_value(
                "output path",
                &paths.output_path(resolver.project_root()).display().to_string(),
            );
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::EnvArgs;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn args(json: bool) -> TargetArgs {
        TargetArgs {
            env: EnvArgs {
                distribution: Some("wechat".to_string()),
                platform: Some("mobile".to_string()),
                ..Default::default()
            },
            json,
        }
    }

    #[test]
    fn lists_derived_paths() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        PathsCommand::new(temp.path(), args(false))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(
            ui.emitted(),
            [
                "entry: ./src/platforms/wechat/mobile",
                "template: ./src/platforms/wechat/mobile/index.html",
                "target: wechat-mobile",
                "output: dist/wechat-mobile/static/",
                "clean: dist/wechat-mobile",
            ]
        );
    }

    #[test]
    fn honours_settings_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".webpack-env.yml"),
            "entry_root: app/\ndist_root: out\n",
        )
        .unwrap();
        let mut ui = MockUI::new();
        PathsCommand::new(temp.path(), args(true))
            .execute(&mut ui)
            .unwrap();

        let payload: serde_json::Value = serde_json::from_str(&ui.emitted()[0]).unwrap();
        assert_eq!(payload["entry"], "app/wechat/mobile");
        assert_eq!(payload["output_dir"], "out/wechat-mobile/static/");
    }
}
