use thiserror::Error;

/// Errors raised while building a [`crate::Server`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServerError {
    #[error("portal #{index} has an empty name")]
    EmptyPortalName { index: usize },

    #[error("gatekeeper #{index} has an empty name")]
    EmptyGatekeeperName { index: usize },

    #[error("duplicate portal name '{name}'")]
    DuplicatePortal { name: String },

    #[error("duplicate gatekeeper name '{name}'")]
    DuplicateGatekeeper { name: String },
}

/// Errors raised by name lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("portal '{name}' not found")]
    PortalNotFound { name: String },

    #[error("gatekeeper '{name}' not found")]
    GatekeeperNotFound { name: String },
}

