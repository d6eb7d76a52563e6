//! Project configuration.
//!
//! Reads the optional `.signcfg.toml` from the project directory and turns
//! it into a ready-to-use [`SigningConfigResolver`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::resolver::SigningConfigResolver;
use crate::core::source::{CredentialSource, EnvSource, PropertiesSource};
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.signcfg.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Properties file and resolution policy
    pub signing: SigningSection,
    /// Environment variable fallback
    pub env: EnvSection,
}

/// `[signing]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SigningSection {
    /// Properties file, relative to the project directory
    pub properties: PathBuf,
    /// Reject partial credentials
    pub strict: bool,
    /// Directory relative store file paths are resolved against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
}

impl Default for SigningSection {
    fn default() -> Self {
        Self {
            properties: PathBuf::from(constants::PROPERTIES_FILE),
            strict: false,
            base_dir: None,
        }
    }
}

/// `[env]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvSection {
    /// Fall back to environment variables for release builds
    pub enabled: bool,
    /// Prefix for variable names (`GLOW_` -> `GLOW_STORE_FILE`)
    pub prefix: String,
}

impl Default for EnvSection {
    fn default() -> Self {
        Self {
            enabled: true,
            prefix: String::new(),
        }
    }
}

impl Config {
    /// Path to the configuration file in a project directory.
    pub fn path(project_dir: &Path) -> PathBuf {
        project_dir.join(constants::CONFIG_FILE)
    }

    /// Load `.signcfg.toml` from the project directory.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read, or
    /// `ConfigError::Parse` if the TOML is malformed or has unknown keys.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = Self::path(project_dir);

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;

        let config: Self =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })?;

        debug!(
            properties = %config.signing.properties.display(),
            strict = config.signing.strict,
            env = config.env.enabled,
            "config loaded"
        );

        Ok(config)
    }

    /// Properties file path, resolved against the project directory.
    pub fn properties_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.signing.properties)
    }

    /// Base directory for relative store files, resolved against the
    /// project directory.
    ///
    /// Defaults to the `app` module next to the properties file, which is
    /// where the Android build resolves `file(storeFile)`.
    pub fn base_dir(&self, project_dir: &Path) -> PathBuf {
        match &self.signing.base_dir {
            Some(dir) => project_dir.join(dir),
            None => {
                let properties = self.properties_path(project_dir);
                properties
                    .parent()
                    .unwrap_or(project_dir)
                    .join(constants::APP_MODULE_DIR)
            }
        }
    }

    /// Build the resolver: the properties file first, then (if enabled)
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the properties file exists but cannot be
    /// read or parsed.
    pub fn resolver(&self, project_dir: &Path) -> Result<SigningConfigResolver> {
        let properties = PropertiesSource::load(self.properties_path(project_dir))?;

        let mut sources: Vec<Box<dyn CredentialSource>> = vec![Box::new(properties)];
        if self.env.enabled {
            sources.push(Box::new(
                EnvSource::process().with_prefix(self.env.prefix.clone()),
            ));
        }

        Ok(SigningConfigResolver::new(sources)
            .strict(self.signing.strict)
            .base_dir(self.base_dir(project_dir)))
    }
}
