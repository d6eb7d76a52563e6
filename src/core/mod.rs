//! Core library components.
//!
//! Credential sources, the resolver, project configuration and keystore
//! inspection. Nothing here prints; diagnostics go through `tracing`.

pub mod config;
pub mod constants;
pub mod credentials;
pub mod keystore;
pub mod resolver;
pub mod source;
pub mod types;
