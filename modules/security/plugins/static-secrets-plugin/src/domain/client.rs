use async_trait::async_trait;
use security_sdk::{SecretBundle, SecretsError, SecretsManager};
use tokio_util::sync::CancellationToken;

use super::service::Service;

#[async_trait]
impl SecretsManager for Service {
    async fn get_secret(&self, ctx: &CancellationToken) -> Result<SecretBundle, SecretsError> {
        if ctx.is_cancelled() {
            return Err(SecretsError::Cancelled);
        }
        Ok(self.bundle().clone())
    }

    async fn get_secret_by_key(
        &self,
        ctx: &CancellationToken,
        key: &str,
    ) -> Result<serde_json::Value, SecretsError> {
        if ctx.is_cancelled() {
            return Err(SecretsError::Cancelled);
        }
        self.get(key)
            .cloned()
            .ok_or_else(|| SecretsError::not_found(key))
    }
}
