//! Error types.
//!
//! One top-level [`Error`] wraps a small enum per concern so callers can
//! match on the failure they care about (most often
//! [`ResolveError::NoCredentialsAvailable`]).

use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::BuildVariant;

/// Top-level error for all signcfg operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Failures reading `.signcfg.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Failures loading a credential source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {reason}")]
    Malformed {
        path: String,
        line: usize,
        reason: String,
    },
}

/// Outcome of a resolution that produced no usable credentials.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No source yielded a store file. Recoverable: the caller falls back to
    /// its default signing identity.
    #[error("no signing credentials available for {variant} builds")]
    NoCredentialsAvailable { variant: BuildVariant },

    /// A store file was found but sibling keys were missing (strict mode).
    #[error("incomplete {variant} credentials from {origin}: missing {}", .missing.join(", "))]
    Incomplete {
        variant: BuildVariant,
        origin: String,
        missing: Vec<&'static str>,
    },
}

/// Failures verifying a resolved keystore.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("keystore not found: {}", .0.display())]
    KeystoreMissing(PathBuf),

    #[error("keystore is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
