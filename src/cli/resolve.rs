//! Resolve command.
//!
//! Shows which credentials a build variant would be signed with. Password
//! values are never printed.

use serde::Serialize;

use crate::cli::{output, Options};
use crate::core::credentials::{CredentialSummary, SigningCredentials};
use crate::core::types::BuildVariant;
use crate::error::{ResolveError, Result};

/// JSON shape of `signcfg resolve --json`.
#[derive(Serialize)]
struct Report {
    variant: BuildVariant,
    resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    credentials: Option<CredentialSummary>,
}

/// Resolve and describe the credentials for a variant.
///
/// Missing credentials are reported but are not an error unless `require`
/// is set, since the build falls back to the debug keystore.
pub fn execute(options: &Options, variant: BuildVariant, json: bool, require: bool) -> Result<()> {
    let resolver = options.resolver()?;

    match resolver.resolve(variant) {
        Ok(creds) => {
            if json {
                print_json(&Report {
                    variant,
                    resolved: true,
                    credentials: Some(creds.summary()),
                })?;
            } else {
                print_credentials(&creds);
            }
            Ok(())
        }
        Err(err @ ResolveError::NoCredentialsAvailable { .. }) => {
            if require {
                return Err(err.into());
            }
            if json {
                print_json(&Report {
                    variant,
                    resolved: false,
                    credentials: None,
                })?;
            } else {
                print_fallback(variant);
            }
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_credentials(creds: &SigningCredentials) {
    output::section(&format!("{} signing", title(creds.variant())));
    output::kv("source", creds.source());
    output::kv("store file", output::path(&creds.store_file().display().to_string()));
    output::kv(
        "key alias",
        if creds.key_alias().is_empty() {
            "(unset)"
        } else {
            creds.key_alias()
        },
    );
    output::kv("key password", creds.key_password());
    output::kv("store password", creds.store_password());

    for key in creds.missing_keys() {
        output::warn(&format!("missing {}", key));
    }
}

/// Tell the user, loudly, that the build will not use release keys.
pub fn print_fallback(variant: BuildVariant) {
    match variant {
        BuildVariant::Release => {
            output::warn("no storeFile provided, release builds will use debug keystore");
            output::hint("add storeFile to key.properties or set STORE_FILE");
        }
        BuildVariant::Debug => {
            output::warn("no storeFileDebug provided, debug builds use the default debug keystore");
        }
    }
}

fn title(variant: BuildVariant) -> &'static str {
    match variant {
        BuildVariant::Debug => "Debug",
        BuildVariant::Release => "Release",
    }
}
