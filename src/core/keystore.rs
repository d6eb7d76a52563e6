//! Keystore file inspection.
//!
//! Verifies that a resolved store file exists and fingerprints it, without
//! opening the keystore itself (that needs the password and a JKS/PKCS#12
//! reader, both the build tool's job).

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{CheckError, Result};

/// Facts about a keystore file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeystoreInfo {
    pub path: PathBuf,
    pub size: u64,
    /// SHA-256 of the file contents, colon-separated uppercase hex
    pub sha256: String,
}

/// Inspect a keystore file.
///
/// # Errors
///
/// Returns `CheckError::KeystoreMissing` if the path does not exist,
/// `CheckError::NotAFile` if it is a directory, or an IO error if it cannot
/// be read.
pub fn inspect(path: &Path) -> Result<KeystoreInfo> {
    debug!(path = %path.display(), "inspecting keystore");

    if !path.exists() {
        return Err(CheckError::KeystoreMissing(path.to_path_buf()).into());
    }
    if !path.is_file() {
        return Err(CheckError::NotAFile(path.to_path_buf()).into());
    }

    let bytes = fs::read(path)?;
    let digest = Sha256::digest(&bytes);

    Ok(KeystoreInfo {
        path: path.to_path_buf(),
        size: bytes.len() as u64,
        sha256: fingerprint(&digest),
    })
}

fn fingerprint(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":")
}
