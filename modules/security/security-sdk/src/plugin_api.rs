use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::SecretsError;

/// Full set of secrets served by one backend, keyed by secret name.
pub type SecretBundle = serde_json::Map<String, serde_json::Value>;

/// Backend adapter trait implemented by secrets manager plugins.
///
/// The `ctx` token carries the caller's cancellation; implementations that
/// perform I/O must stop and return [`SecretsError::Cancelled`] once it
/// fires. Instances share no mutable state with each other.
#[async_trait]
pub trait SecretsManager: Send + Sync {
    /// Returns the whole bundle managed by the backend.
    ///
    /// # Errors
    ///
    /// - `Cancelled` if `ctx` fired before the backend answered
    /// - `Unavailable` / `Unauthorized` / `Decode` for backend failures
    async fn get_secret(&self, ctx: &CancellationToken) -> Result<SecretBundle, SecretsError>;

    /// Returns a single secret.
    ///
    /// The default implementation fetches the bundle and picks `key` out
    /// of it.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `key` is absent from the bundle
    /// - any error of [`SecretsManager::get_secret`]
    async fn get_secret_by_key(
        &self,
        ctx: &CancellationToken,
        key: &str,
    ) -> Result<serde_json::Value, SecretsError> {
        let mut bundle = self.get_secret(ctx).await?;
        bundle
            .remove(key)
            .ok_or_else(|| SecretsError::not_found(key))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    struct OneSecret;

    #[async_trait]
    impl SecretsManager for OneSecret {
        async fn get_secret(
            &self,
            _ctx: &CancellationToken,
        ) -> Result<SecretBundle, SecretsError> {
            let mut bundle = SecretBundle::new();
            bundle.insert("api_key".to_owned(), json!("sk-test-123"));
            Ok(bundle)
        }
    }

    struct Unreachable;

    #[async_trait]
    impl SecretsManager for Unreachable {
        async fn get_secret(
            &self,
            _ctx: &CancellationToken,
        ) -> Result<SecretBundle, SecretsError> {
            Err(SecretsError::unavailable("connection refused"))
        }
    }

    #[tokio::test]
    async fn default_keyed_lookup_returns_value() {
        let value = OneSecret
            .get_secret_by_key(&CancellationToken::new(), "api_key")
            .await
            .unwrap();
        assert_eq!(value, json!("sk-test-123"));
    }

    #[tokio::test]
    async fn default_keyed_lookup_reports_missing_key() {
        let err = OneSecret
            .get_secret_by_key(&CancellationToken::new(), "missing")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "secret 'missing' not found");
    }

    #[tokio::test]
    async fn default_keyed_lookup_surfaces_backend_error() {
        let err = Unreachable
            .get_secret_by_key(&CancellationToken::new(), "api_key")
            .await
            .unwrap_err();
        assert_eq!(err, SecretsError::unavailable("connection refused"));
    }
}
