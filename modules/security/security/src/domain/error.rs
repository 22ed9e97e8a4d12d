//! Errors of the security app.

use modkit::{ConfigError, LoadError};
use security_engine::{LookupError, ServerError};
use thiserror::Error;

/// Provisioning failures. Each one leaves the app unusable.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("{app} is already provisioned")]
    AlreadyProvisioned { app: &'static str },

    #[error("{app} failed provisioning earlier and cannot be provisioned again")]
    PreviouslyFailed { app: &'static str },

    #[error("{app} has an invalid configuration")]
    Config {
        app: &'static str,
        #[source]
        source: ConfigError,
    },

    #[error("{app} failed loading secrets manager plugins")]
    LoadPlugins {
        app: &'static str,
        #[source]
        source: LoadError,
    },

    #[error("{app} failed building its server")]
    Server {
        app: &'static str,
        #[source]
        source: ServerError,
    },
}

/// Errors returned to callers of the app's lookup surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SecurityError {
    #[error("{app} is not provisioned")]
    NotProvisioned { app: &'static str },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl SecurityError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }
}
