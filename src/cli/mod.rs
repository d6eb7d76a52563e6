//! Command-line interface.

pub mod check;
pub mod completions;
pub mod output;
pub mod resolve;
pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::resolver::SigningConfigResolver;
use crate::core::types::BuildVariant;
use crate::error::Result;

/// signcfg - Resolve Android signing credentials.
#[derive(Parser)]
#[command(
    name = "signcfg",
    about = "Resolve Android signing credentials from key.properties and CI environment variables",
    version,
    after_help = "Release builds without credentials fall back to the debug keystore."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub options: Options,
}

/// Flags shared by every command; they override `.signcfg.toml`.
#[derive(clap::Args, Debug, Clone)]
pub struct Options {
    /// Project directory
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Properties file, relative to the project directory
    #[arg(long, global = true, env = "SIGNCFG_PROPERTIES")]
    pub properties: Option<PathBuf>,

    /// Do not fall back to environment variables
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Treat missing alias or passwords as an error
    #[arg(long, global = true)]
    pub strict: bool,
}

impl Options {
    /// Load `.signcfg.toml`, apply flag overrides and build the resolver.
    pub fn resolver(&self) -> Result<SigningConfigResolver> {
        let mut config = Config::load(&self.dir)?;

        if let Some(properties) = &self.properties {
            config.signing.properties = properties.clone();
        }
        if self.no_env {
            config.env.enabled = false;
        }
        if self.strict {
            config.signing.strict = true;
        }

        config.resolver(&self.dir)
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show which credentials a build variant would be signed with
    Resolve {
        /// Build variant
        #[arg(value_enum)]
        variant: BuildVariant,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Fail instead of falling back to the debug keystore
        #[arg(long)]
        require: bool,
    },

    /// Verify that the resolved keystore exists and print its fingerprint
    Check {
        /// Build variant
        #[arg(value_enum, default_value = "release")]
        variant: BuildVariant,
    },

    /// Run a command with signing credentials injected as env vars
    Run {
        /// Build variant to resolve
        #[arg(long, value_enum, default_value = "release")]
        variant: BuildVariant,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, options: &Options) -> Result<()> {
    use Command::*;

    match command {
        Resolve {
            variant,
            json,
            require,
        } => resolve::execute(options, variant, json, require),
        Check { variant } => check::execute(options, variant),
        Run { variant, command } => run::execute(options, variant, &command),
        Completions { shell } => completions::execute(shell),
    }
}
