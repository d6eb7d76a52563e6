//! Signing credential resolution.
//!
//! Sources are consulted in priority order. For release builds the first
//! source that provides a store file supplies all four fields; nothing is
//! merged across sources. Debug builds only ever consult the first source.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::core::constants::KeySet;
use crate::core::credentials::SigningCredentials;
use crate::core::source::CredentialSource;
use crate::core::types::{BuildVariant, Secret};
use crate::error::ResolveError;

/// Resolves [`SigningCredentials`] from an ordered list of sources.
///
/// # Example
///
/// ```
/// use signcfg::core::resolver::SigningConfigResolver;
/// use signcfg::core::source::{CredentialSource, EnvSource, PropertiesSource};
/// use signcfg::core::types::BuildVariant;
///
/// let properties = PropertiesSource::from_pairs("key.properties", Vec::<(String, String)>::new());
/// let env = EnvSource::from_vars([
///     ("STORE_FILE", "/ci/key.jks"),
///     ("KEY_ALIAS", "ci"),
///     ("KEY_PASSWORD", "p"),
///     ("STORE_PASSWORD", "q"),
/// ]);
///
/// let mut sources: Vec<Box<dyn CredentialSource>> = Vec::new();
/// sources.push(Box::new(properties));
/// sources.push(Box::new(env));
///
/// let resolver = SigningConfigResolver::new(sources);
/// let creds = resolver.resolve(BuildVariant::Release).unwrap();
/// assert_eq!(creds.key_alias(), "ci");
/// ```
pub struct SigningConfigResolver {
    sources: Vec<Box<dyn CredentialSource>>,
    strict: bool,
    base_dir: Option<PathBuf>,
}

impl SigningConfigResolver {
    /// Create a resolver. Sources are tried in the given order.
    pub fn new(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self {
            sources,
            strict: false,
            base_dir: None,
        }
    }

    /// Reject a store file whose sibling keys are missing instead of
    /// returning partially populated credentials.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Directory that relative store file paths are resolved against.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn sources(&self) -> &[Box<dyn CredentialSource>] {
        &self.sources
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Resolve credentials for a build variant.
    ///
    /// # Errors
    ///
    /// `ResolveError::NoCredentialsAvailable` when no consulted source has a
    /// store file; the caller is expected to fall back to its default
    /// (debug) signing identity. `ResolveError::Incomplete` in strict mode
    /// when the chosen source lacks a sibling key.
    pub fn resolve(&self, variant: BuildVariant) -> Result<SigningCredentials, ResolveError> {
        let keys = KeySet::for_variant(variant);

        let candidates = match variant {
            BuildVariant::Debug => &self.sources[..self.sources.len().min(1)],
            BuildVariant::Release => &self.sources[..],
        };

        for source in candidates {
            let Some(store_file) = present(source.lookup(keys.store_file)) else {
                debug!(source = source.name(), key = keys.store_file, "not provided");
                continue;
            };

            info!(
                source = source.name(),
                %variant,
                "using key properties from {}",
                source.name()
            );
            return self.complete(variant, &keys, &**source, store_file);
        }

        match variant {
            BuildVariant::Release => info!(
                "no storeFile provided, release builds will use the debug keystore"
            ),
            BuildVariant::Debug => debug!(
                "no storeFileDebug provided, debug builds will use the default debug keystore"
            ),
        }

        Err(ResolveError::NoCredentialsAvailable { variant })
    }

    /// Read the sibling keys from the source that supplied the store file.
    fn complete(
        &self,
        variant: BuildVariant,
        keys: &KeySet,
        source: &dyn CredentialSource,
        store_file: String,
    ) -> Result<SigningCredentials, ResolveError> {
        let key_alias = present(source.lookup(keys.key_alias)).unwrap_or_default();
        let key_password = present(source.lookup(keys.key_password))
            .map(Secret::new)
            .unwrap_or_else(Secret::empty);
        let store_password = present(source.lookup(keys.store_password))
            .map(Secret::new)
            .unwrap_or_else(Secret::empty);

        let mut store_path = PathBuf::from(store_file);
        if let Some(base) = &self.base_dir {
            if store_path.is_relative() {
                store_path = base.join(store_path);
            }
        }

        let creds = SigningCredentials::new(
            variant,
            store_path,
            key_alias,
            key_password,
            store_password,
            source.name(),
        );

        let missing = creds.missing_keys();
        if !missing.is_empty() {
            if self.strict {
                return Err(ResolveError::Incomplete {
                    variant,
                    origin: source.name().to_string(),
                    missing,
                });
            }
            warn!(
                source = source.name(),
                missing = %missing.join(", "),
                "partial signing credentials"
            );
        }

        Ok(creds)
    }
}

impl std::fmt::Debug for SigningConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("SigningConfigResolver")
            .field("sources", &names)
            .field("strict", &self.strict)
            .field("base_dir", &self.base_dir)
            .finish()
    }
}

/// Empty or whitespace-only values count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
