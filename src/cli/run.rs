//! Run command.
//!
//! Executes a build command with resolved signing credentials injected as
//! environment variables.

use crate::cli::{resolve, Options};
use crate::core::constants;
use crate::core::types::BuildVariant;
use crate::error::{ResolveError, Result};

/// Run a command with signing credentials injected as environment variables.
pub fn execute(options: &Options, variant: BuildVariant, command: &[String]) -> Result<()> {
    let exit_code = run_with_credentials(options, variant, command)?;
    std::process::exit(exit_code);
}

fn run_with_credentials(options: &Options, variant: BuildVariant, command: &[String]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        return Err(crate::error::Error::Other(
            "no command specified".to_string(),
        ));
    };

    let resolver = options.resolver()?;

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);

    // Only the chosen source may reach the child, never inherited values
    for name in constants::ENV_VARS {
        cmd.env_remove(name);
    }

    match resolver.resolve(variant) {
        Ok(creds) => {
            // Values are wiped when `vars` goes out of scope
            let vars = creds.to_env();
            for (key, value) in &vars {
                cmd.env(key, value.as_str());
            }
        }
        // The build still runs; it signs with its default identity
        Err(ResolveError::NoCredentialsAvailable { .. }) => resolve::print_fallback(variant),
        Err(err) => return Err(err.into()),
    }

    let status = cmd.status()?;
    // Terminated by a signal: no code, report failure
    Ok(status.code().unwrap_or(1))
}
