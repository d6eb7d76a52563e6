//! signcfg - Resolve Android signing credentials.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use signcfg::cli::output;
use signcfg::cli::{execute, Cli};
use signcfg::core::constants;
use signcfg::error::{CheckError, ConfigError, Error, ResolveError, SourceError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("signcfg=debug")
        } else {
            EnvFilter::new("signcfg=warn")
        }
    });

    // CI runners collect structured logs; everything else gets plain text
    let json_logs = std::env::var(constants::LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if let Err(e) = execute(cli.command, &cli.options) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Resolve(ResolveError::NoCredentialsAvailable { .. }) => {
                Some("add storeFile to key.properties or set STORE_FILE")
            }
            Error::Resolve(ResolveError::Incomplete { .. }) => {
                Some("fill in the missing keys, or drop --strict to allow partial credentials")
            }
            Error::Check(CheckError::KeystoreMissing(_)) => {
                Some("check storeFile in key.properties (relative paths use signing.base_dir)")
            }
            Error::Config(ConfigError::Parse { .. }) => Some("fix or remove .signcfg.toml"),
            Error::Source(SourceError::Malformed { .. }) => {
                Some("escape backslashes in key.properties as \\\\")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
