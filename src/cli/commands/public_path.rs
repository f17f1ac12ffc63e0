//! Public path command implementation.
//!
//! The `webpack-env public-path` command prints the asset URL prefix a
//! production build would use for the current environment.

use crate::cli::args::TargetArgs;
use crate::environment::BuildMode;
use crate::error::{Result, WebpackEnvError};
use crate::resolver::public_path_for;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The public-path command implementation.
pub struct PublicPathCommand {
    args: TargetArgs,
}

impl PublicPathCommand {
    /// Create a new public-path command.
    pub fn new(args: TargetArgs) -> Self {
        Self { args }
    }
}

impl Command for PublicPathCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = self.args.env.snapshot()?;
        if env.mode == BuildMode::Development {
            ui.warning("Development builds serve assets from the dev server root");
        }

        let public_path = public_path_for(&env);

        if self.args.json {
            let rendered = serde_json::to_string_pretty(&public_path).map_err(|e| {
                WebpackEnvError::Serialize {
                    message: e.to_string(),
                }
            })?;
            ui.emit(&rendered);
        } else {
            ui.emit(&public_path.output);
            if let Some(file_loader) = &public_path.file_loader {
                ui.key_value("fileLoader", file_loader);
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::EnvArgs;
    use crate::ui::MockUI;

    fn args(cdn: &str, distribution: &str, configuration: Option<&str>) -> TargetArgs {
        TargetArgs {
            env: EnvArgs {
                mode: Some("production".to_string()),
                cdn: Some(cdn.to_string()),
                distribution: Some(distribution.to_string()),
                platform: Some("mobile".to_string()),
                configuration: configuration.map(str::to_string),
            },
            json: false,
        }
    }

    #[test]
    fn prints_wechat_default_prefix() {
        let mut ui = MockUI::new();
        PublicPathCommand::new(args("false", "wechat", Some("default")))
            .execute(&mut ui)
            .unwrap();
        assert_eq!(ui.emitted(), ["/weixin/static/"]);
    }

    #[test]
    fn dingtalk_cdn_reports_file_loader() {
        let mut ui = MockUI::new();
        PublicPathCommand::new(args("true", "dingtalk", None))
            .execute(&mut ui)
            .unwrap();
        assert_eq!(ui.emitted(), ["https://ding.teambition.com/static/"]);
        assert!(ui.has_message("fileLoader: ./static"));
    }

    #[test]
    fn json_output() {
        let mut ui = MockUI::new();
        let mut target = args("false", "unknown-dist", None);
        target.json = true;
        PublicPathCommand::new(target).execute(&mut ui).unwrap();

        let payload: serde_json::Value = serde_json::from_str(&ui.emitted()[0]).unwrap();
        assert_eq!(payload["output"], "/static/");
        assert!(payload.get("fileLoader").is_none());
    }

    #[test]
    fn development_mode_warns() {
        let mut ui = MockUI::new();
        let mut target = args("false", "cms", None);
        target.env.mode = Some("development".to_string());
        PublicPathCommand::new(target).execute(&mut ui).unwrap();

        assert_eq!(ui.warnings().len(), 1);
        assert_eq!(ui.emitted(), ["/cms/static/"]);
    }
}
