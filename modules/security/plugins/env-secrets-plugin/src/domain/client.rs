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
        Ok(self.collect())
    }
}
