use async_trait::async_trait;
use security_sdk::{SecretBundle, SecretsError, SecretsManager};
use tokio_util::sync::CancellationToken;

use super::service::Service;

#[async_trait]
impl SecretsManager for Service {
    async fn get_secret(&self, ctx: &CancellationToken) -> Result<SecretBundle, SecretsError> {
        tokio::select! {
            biased;
            () = ctx.cancelled() => Err(SecretsError::Cancelled),
            result = self.fetch() => result,
        }
    }
}
