use std::sync::Arc;

use modkit::PluginFactory;
use security_sdk::SecretsManager;
use tracing::info;

use crate::config::EnvSecretsPluginConfig;
use crate::domain::Service;

/// Factory for the `env` secrets manager driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSecretsPluginFactory;

impl EnvSecretsPluginFactory {
    pub const DRIVER: &'static str = "env";
}

impl PluginFactory<dyn SecretsManager> for EnvSecretsPluginFactory {
    fn driver(&self) -> &'static str {
        Self::DRIVER
    }

    fn create(&self, settings: serde_json::Value) -> anyhow::Result<Arc<dyn SecretsManager>> {
        let cfg: EnvSecretsPluginConfig = serde_json::from_value(settings)?;
        cfg.validate()?;

        info!(
            driver = Self::DRIVER,
            prefix = cfg.prefix.as_deref().unwrap_or_default(),
            key_count = cfg.keys.len(),
            "Loaded plugin configuration"
        );

        Ok(Arc::new(Service::from_config(cfg)))
    }
}
