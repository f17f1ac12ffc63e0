//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::environment::snapshot::{CDN, CONFIG, DISTRIBUTION, NODE_ENV, PLATFORM};
use crate::environment::EnvSnapshot;
use crate::error::Result;

/// webpack-env - Resolve environment-dependent bundler configuration.
#[derive(Debug, Parser)]
#[command(name = "webpack-env")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve and print the bundler configuration (default if no command specified)
    Resolve(ResolveArgs),

    /// Show the public asset path for a production build
    PublicPath(TargetArgs),

    /// Show the entry and output locations for a target
    Paths(TargetArgs),

    /// Remove the previous output tree for a target
    Clean(TargetArgs),

    /// Print the JSON schema of the settings file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Build inputs. Each flag falls back to its environment variable.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvArgs {
    /// Build mode; `development` selects the development branch
    #[arg(long, env = "NODE_ENV", value_name = "ENV")]
    pub mode: Option<String>,

    /// Serve static assets from a CDN (`true` to enable)
    #[arg(long, env = "CDN", value_name = "BOOL")]
    pub cdn: Option<String>,

    /// Distribution identifier (e.g. dingtalk, teambition, wechat)
    #[arg(long, env = "DISTRIBUTION", value_name = "NAME")]
    pub distribution: Option<String>,

    /// Platform identifier (e.g. web, mobile)
    #[arg(long, env = "PLATFORM", value_name = "NAME")]
    pub platform: Option<String>,

    /// Configuration variant (e.g. default)
    #[arg(long = "config-variant", env = "CONFIG", value_name = "NAME")]
    pub configuration: Option<String>,
}

impl EnvArgs {
    /// Read every input straight from the process environment.
    ///
    /// Used when no subcommand was given, so clap never parsed the flags.
    pub fn from_process_env() -> Self {
        let var = |key: &str| std::env::var(key).ok();
        Self {
            mode: var(NODE_ENV),
            cdn: var(CDN),
            distribution: var(DISTRIBUTION),
            platform: var(PLATFORM),
            configuration: var(CONFIG),
        }
    }

    /// Build the environment snapshot from these inputs.
    pub fn snapshot(&self) -> Result<EnvSnapshot> {
        EnvSnapshot::from_lookup(|key| match key {
            NODE_ENV => self.mode.clone(),
            CDN => self.cdn.clone(),
            DISTRIBUTION => self.distribution.clone(),
            PLATFORM => self.platform.clone(),
            CONFIG => self.configuration.clone(),
            _ => None,
        })
    }
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    /// Output as JSON (default)
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML
    #[arg(long)]
    pub yaml: bool,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Keep the previous output tree in production builds
    #[arg(long)]
    pub no_clean: bool,
}

/// Arguments for commands that only need the target.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn resolve_flags_feed_snapshot() {
        let cli = Cli::parse_from([
            "webpack-env",
            "resolve",
            "--mode",
            "production",
            "--cdn",
            "true",
            "--distribution",
            "dingtalk",
            "--platform",
            "mobile",
        ]);
        let Some(Commands::Resolve(args)) = cli.command else {
            panic!("Expected Resolve command");
        };
        let env = args.env.snapshot().unwrap();
        assert!(env.cdn);
        assert_eq!(env.target(), "dingtalk-mobile");
    }

    #[test]
    fn config_variant_flag() {
        let cli = Cli::parse_from([
            "webpack-env",
            "public-path",
            "--distribution",
            "wechat",
            "--platform",
            "mobile",
            "--config-variant",
            "default",
        ]);
        let Some(Commands::PublicPath(args)) = cli.command else {
            panic!("Expected PublicPath command");
        };
        assert_eq!(args.env.configuration.as_deref(), Some("default"));
    }

    #[test]
    fn json_and_yaml_conflict() {
        let result = Cli::try_parse_from(["webpack-env", "resolve", "--json", "--yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_inputs_surface_at_snapshot() {
        let args = EnvArgs {
            distribution: Some("cms".to_string()),
            ..Default::default()
        };
        assert!(args.snapshot().is_err());
    }
}
