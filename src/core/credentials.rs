//! Resolved signing credentials.

use std::path::{Path, PathBuf};

use serde::Serialize;
use zeroize::Zeroizing;

use crate::core::constants::{self, KeySet};
use crate::core::types::{BuildVariant, Secret};

/// Key material for signing one build variant.
///
/// Produced by [`SigningConfigResolver`](crate::core::resolver::SigningConfigResolver)
/// and owned by the caller. In permissive mode the alias and passwords may
/// be unset; [`missing_keys`](Self::missing_keys) reports which.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningCredentials {
    variant: BuildVariant,
    store_file: PathBuf,
    key_alias: String,
    key_password: Secret,
    store_password: Secret,
    source: String,
}

impl SigningCredentials {
    pub fn new(
        variant: BuildVariant,
        store_file: impl Into<PathBuf>,
        key_alias: impl Into<String>,
        key_password: Secret,
        store_password: Secret,
        source: impl Into<String>,
    ) -> Self {
        Self {
            variant,
            store_file: store_file.into(),
            key_alias: key_alias.into(),
            key_password,
            store_password,
            source: source.into(),
        }
    }

    pub fn variant(&self) -> BuildVariant {
        self.variant
    }

    /// Keystore path.
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    pub fn key_password(&self) -> &Secret {
        &self.key_password
    }

    pub fn store_password(&self) -> &Secret {
        &self.store_password
    }

    /// Name of the source that supplied these credentials.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Property keys whose values were absent.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let keys = KeySet::for_variant(self.variant);
        let mut missing = Vec::new();

        if self.key_alias.is_empty() {
            missing.push(keys.key_alias);
        }
        if self.key_password.is_empty() {
            missing.push(keys.key_password);
        }
        if self.store_password.is_empty() {
            missing.push(keys.store_password);
        }

        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_keys().is_empty()
    }

    /// Environment variables for handing the credentials to a build tool.
    ///
    /// Unset fields are omitted. Values are wiped when the returned pairs
    /// are dropped.
    pub fn to_env(&self) -> Vec<(&'static str, Zeroizing<String>)> {
        let mut vars = vec![(
            constants::ENV_STORE_FILE,
            Zeroizing::new(self.store_file.display().to_string()),
        )];

        if !self.key_alias.is_empty() {
            vars.push((constants::ENV_KEY_ALIAS, Zeroizing::new(self.key_alias.clone())));
        }
        if !self.key_password.is_empty() {
            vars.push((
                constants::ENV_KEY_PASSWORD,
                Zeroizing::new(self.key_password.expose().to_string()),
            ));
        }
        if !self.store_password.is_empty() {
            vars.push((
                constants::ENV_STORE_PASSWORD,
                Zeroizing::new(self.store_password.expose().to_string()),
            ));
        }

        vars
    }

    /// Serializable view without password values.
    pub fn summary(&self) -> CredentialSummary {
        CredentialSummary {
            variant: self.variant,
            source: self.source.clone(),
            store_file: self.store_file.display().to_string(),
            key_alias: self.key_alias.clone(),
            key_password_set: !self.key_password.is_empty(),
            store_password_set: !self.store_password.is_empty(),
            missing: self.missing_keys(),
        }
    }
}

/// Redacted description of [`SigningCredentials`], safe to print.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialSummary {
    pub variant: BuildVariant,
    pub source: String,
    pub store_file: String,
    pub key_alias: String,
    pub key_password_set: bool,
    pub store_password_set: bool,
    pub missing: Vec<&'static str>,
}
