//! Test support utilities for signcfg integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// No process-global state is mutated: child processes use
/// `.current_dir()` and explicit env vars so tests can run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty project.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a project with a `key.properties` file.
    pub fn with_properties(contents: &str) -> Self {
        let t = Self::new();
        t.write("key.properties", contents);
        t
    }

    /// Write a file relative to the project directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// Write a fake keystore file.
    pub fn keystore(&self, name: &str) -> PathBuf {
        self.write(name, KEYSTORE_BYTES)
    }

    /// Write `.signcfg.toml`.
    pub fn config(&self, contents: &str) {
        self.write(".signcfg.toml", contents);
    }
}
