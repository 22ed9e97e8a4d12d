use thiserror::Error;

/// Errors returned by secrets manager backends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SecretsError {
    #[error("secret '{key}' not found")]
    NotFound { key: String },

    #[error("operation cancelled")]
    Cancelled,

    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("backend rejected credentials: {0}")]
    Unauthorized(String),

    #[error("failed to decode secret bundle: {0}")]
    Decode(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl SecretsError {
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    #[must_use]
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    #[must_use]
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the error is the "key absent from bundle" condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
