//! Check command.
//!
//! Resolves credentials and verifies the keystore before a build starts.

use crate::cli::{output, Options};
use crate::core::keystore;
use crate::core::types::BuildVariant;
use crate::error::{ResolveError, Result};

/// Verify that a variant has complete credentials and a readable keystore.
pub fn execute(options: &Options, variant: BuildVariant) -> Result<()> {
    let resolver = options.resolver()?;
    let creds = resolver.resolve(variant)?;

    let missing = creds.missing_keys();
    if !missing.is_empty() {
        return Err(ResolveError::Incomplete {
            variant,
            origin: creds.source().to_string(),
            missing,
        }
        .into());
    }

    let info = keystore::inspect(creds.store_file())?;

    output::kv("source", creds.source());
    output::kv("store file", output::path(&info.path.display().to_string()));
    output::kv("size", format!("{} bytes", info.size));
    output::kv("sha256", &info.sha256);
    output::success(&format!("{} signing ready", variant));

    Ok(())
}
