//! Constants used throughout signcfg.
//!
//! Centralizes file names, property keys and environment variable names.

use crate::core::types::BuildVariant;

/// Project configuration file name (.signcfg.toml).
pub const CONFIG_FILE: &str = ".signcfg.toml";

/// Default signing properties file, relative to the project directory.
pub const PROPERTIES_FILE: &str = "key.properties";

/// App module directory, next to the properties file. Gradle resolves
/// relative store files from here.
pub const APP_MODULE_DIR: &str = "app";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SIGNCFG_LOG";

/// Environment variable selecting the log format (`json` or `text`).
pub const LOG_FORMAT_ENV: &str = "SIGNCFG_LOG_FORMAT";

/// Environment variables injected into child processes by `signcfg run`.
pub const ENV_STORE_FILE: &str = "STORE_FILE";
pub const ENV_KEY_ALIAS: &str = "KEY_ALIAS";
pub const ENV_KEY_PASSWORD: &str = "KEY_PASSWORD";
pub const ENV_STORE_PASSWORD: &str = "STORE_PASSWORD";

/// All injected names, cleared from the child before injection.
pub const ENV_VARS: [&str; 4] = [
    ENV_STORE_FILE,
    ENV_KEY_ALIAS,
    ENV_KEY_PASSWORD,
    ENV_STORE_PASSWORD,
];

/// Property keys requested from each source for one build variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySet {
    pub store_file: &'static str,
    pub key_alias: &'static str,
    pub key_password: &'static str,
    pub store_password: &'static str,
}

const DEBUG_KEYS: KeySet = KeySet {
    store_file: "storeFileDebug",
    key_alias: "keyAliasDebug",
    key_password: "keyPasswordDebug",
    store_password: "storePasswordDebug",
};

const RELEASE_KEYS: KeySet = KeySet {
    store_file: "storeFile",
    key_alias: "keyAlias",
    key_password: "keyPassword",
    store_password: "storePassword",
};

impl KeySet {
    pub const fn for_variant(variant: BuildVariant) -> Self {
        match variant {
            BuildVariant::Debug => DEBUG_KEYS,
            BuildVariant::Release => RELEASE_KEYS,
        }
    }
}
