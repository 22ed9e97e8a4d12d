use std::sync::Arc;

use anyhow::Context;
use modkit::PluginFactory;
use secrecy::SecretString;
use security_sdk::SecretsManager;
use tracing::info;

use crate::config::{VAULT_TOKEN_ENV, VaultSecretsPluginConfig};
use crate::domain::Service;

/// Factory for the `vault` secrets manager driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct VaultSecretsPluginFactory;

impl VaultSecretsPluginFactory {
    pub const DRIVER: &'static str = "vault";
}

impl PluginFactory<dyn SecretsManager> for VaultSecretsPluginFactory {
    fn driver(&self) -> &'static str {
        Self::DRIVER
    }

    fn create(&self, settings: serde_json::Value) -> anyhow::Result<Arc<dyn SecretsManager>> {
        let mut cfg: VaultSecretsPluginConfig = serde_json::from_value(settings)?;

        let token = match cfg.token.take() {
            Some(token) => token,
            None => std::env::var(VAULT_TOKEN_ENV)
                .ok()
                .filter(|t| !t.is_empty())
                .map(SecretString::from)
                .with_context(|| {
                    format!("vault 'token' is not configured and {VAULT_TOKEN_ENV} is not set")
                })?,
        };

        let service = Service::from_config(cfg, token)?;

        info!(
            driver = Self::DRIVER,
            url = %service.url(),
            "Loaded plugin configuration"
        );

        Ok(Arc::new(service))
    }
}
