//! HTTP client for the Devin API.
//!
//! Provides:
//! - `DevinConfig` / `ApiKey` - Configuration and one-time credential validation
//! - `DevinClient` - `reqwest`-based implementation of `SessionApi`

pub mod client;
pub mod config;
mod wire;

pub use client::DevinClient;
pub use config::{ApiKey, CredentialError, DEFAULT_POLL_INTERVAL, DEVIN_API_BASE, DevinConfig};
