use std::sync::Arc;

use modkit::PluginFactory;
use security_sdk::SecretsManager;
use tracing::info;

use crate::config::StaticSecretsPluginConfig;
use crate::domain::Service;

/// Factory for the `static` secrets manager driver.
///
/// Serves secrets declared inline in the configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSecretsPluginFactory;

impl StaticSecretsPluginFactory {
    pub const DRIVER: &'static str = "static";
}

impl PluginFactory<dyn SecretsManager> for StaticSecretsPluginFactory {
    fn driver(&self) -> &'static str {
        Self::DRIVER
    }

    fn create(&self, settings: serde_json::Value) -> anyhow::Result<Arc<dyn SecretsManager>> {
        let cfg: StaticSecretsPluginConfig = serde_json::from_value(settings)?;

        info!(
            driver = Self::DRIVER,
            secret_count = cfg.secrets.len(),
            "Loaded plugin configuration"
        );

        Ok(Arc::new(Service::from_config(cfg)))
    }
}
