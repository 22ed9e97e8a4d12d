//! Security SDK
//!
//! This crate provides the plugin contract of the `security` app:
//!
//! - [`SecretsManager`] - Plugin API trait for secret backends
//! - [`SecretBundle`] - Full set of secrets served by one backend
//! - [`SecretsError`] - Error types
//! - [`SecretsPluginRegistry`] - Driver-keyed factories for the
//!   [`SECRETS_NAMESPACE`] namespace
//!
//! ## Usage
//!
//! ```ignore
//! use security_sdk::SecretsManager;
//! use tokio_util::sync::CancellationToken;
//!
//! let cancel = CancellationToken::new();
//! let bundle = manager.get_secret(&cancel).await?;
//! let api_key = manager.get_secret_by_key(&cancel, "api_key").await?;
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod plugin_api;

pub use error::SecretsError;
pub use plugin_api::{SecretBundle, SecretsManager};

/// Capability namespace of secrets manager plugins.
pub const SECRETS_NAMESPACE: &str = "security.secrets";

/// Registry of secrets manager factories.
pub type SecretsPluginRegistry = modkit::PluginRegistry<dyn SecretsManager>;

/// Creates an empty registry bound to [`SECRETS_NAMESPACE`].
#[must_use]
pub fn secrets_plugin_registry() -> SecretsPluginRegistry {
    SecretsPluginRegistry::new(SECRETS_NAMESPACE)
}
