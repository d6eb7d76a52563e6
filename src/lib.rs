//! signcfg - Resolve Android signing credentials for debug and release builds.
//!
//! Credentials come from a local `key.properties` file, falling back to CI
//! environment variables (`STORE_FILE`, `KEY_ALIAS`, `KEY_PASSWORD`,
//! `STORE_PASSWORD`) for release builds. When nothing resolves, callers are
//! told so and use their default debug keystore.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── resolve       # Show resolved credentials
//! │   ├── check         # Verify keystore and fingerprint it
//! │   ├── run           # Run a build with credentials injected
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # .signcfg.toml management
//!     ├── constants     # File names, property keys, env var names
//!     ├── credentials   # SigningCredentials
//!     ├── keystore      # Keystore file inspection
//!     ├── resolver      # Priority-ordered resolution
//!     ├── source/       # Credential sources
//!     │   ├── mod       # CredentialSource trait
//!     │   ├── env       # Environment variables
//!     │   └── properties # key.properties
//!     └── types         # BuildVariant, Secret
//! ```

pub mod cli;
pub mod core;
pub mod error;
