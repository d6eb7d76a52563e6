//! Credential sources.
//!
//! A source is an ordered, named, read-only view over key-value signing
//! material. The resolver consults sources in priority order and never
//! mutates them.

mod env;
mod properties;

pub use env::EnvSource;
pub use properties::PropertiesSource;

/// A named provider of signing material.
pub trait CredentialSource {
    /// Human-readable name, used in diagnostics only.
    fn name(&self) -> &str;

    /// Look up a property key (e.g. `storeFile`).
    ///
    /// Must be a pure read: no side effects, same answer for the same key.
    fn lookup(&self, key: &str) -> Option<String>;
}
