//! Service implementation for the static secrets plugin.

use security_sdk::SecretBundle;

use crate::config::StaticSecretsPluginConfig;

/// Static secrets service.
///
/// Holds the configured bundle in memory; it never changes after creation.
pub struct Service {
    bundle: SecretBundle,
}

impl Service {
    #[must_use]
    pub fn from_config(cfg: StaticSecretsPluginConfig) -> Self {
        Self {
            bundle: cfg.secrets,
        }
    }

    #[must_use]
    pub fn bundle(&self) -> &SecretBundle {
        &self.bundle
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.bundle.get(key)
    }
}
