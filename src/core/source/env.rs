//! Environment variable source.

use std::collections::BTreeMap;
use std::env;

use super::CredentialSource;

/// Read-only view of environment variables, as provided by CI runners.
///
/// Property keys are mapped to SCREAMING_SNAKE variable names, with an
/// optional prefix:
/// - `storeFile` -> `STORE_FILE`
/// - `keyPassword` -> `KEY_PASSWORD`
/// - `storeFile` with prefix `GLOW_` -> `GLOW_STORE_FILE`
///
/// # Example
///
/// ```
/// use signcfg::core::source::{CredentialSource, EnvSource};
///
/// let source = EnvSource::from_vars([("STORE_FILE", "/ci/key.jks")]);
/// assert_eq!(source.lookup("storeFile"), Some("/ci/key.jks".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    prefix: String,
    /// Snapshot of variables; `None` reads the live process environment.
    vars: Option<BTreeMap<String, String>>,
}

impl EnvSource {
    /// View over the current process environment.
    pub fn process() -> Self {
        Self {
            prefix: String::new(),
            vars: None,
        }
    }

    /// Fixed set of variables, independent of the process environment.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix: String::new(),
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Prepend `prefix` to every variable name.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Variable name consulted for a property key.
    pub fn var_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, screaming_snake(key))
    }
}

impl CredentialSource for EnvSource {
    fn name(&self) -> &str {
        "environment variables"
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let name = self.var_name(key);
        match &self.vars {
            Some(vars) => vars.get(&name).cloned(),
            None => env::var(&name).ok(),
        }
    }
}

/// `storeFileDebug` -> `STORE_FILE_DEBUG`
fn screaming_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;

    for ch in key.chars() {
        if ch.is_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        out.extend(ch.to_uppercase());
    }

    out
}
