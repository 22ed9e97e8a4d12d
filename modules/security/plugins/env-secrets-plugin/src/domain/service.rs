//! Service implementation for the environment secrets plugin.

use security_sdk::SecretBundle;
use serde_json::Value;

use crate::config::EnvSecretsPluginConfig;

/// Environment secrets service.
///
/// The environment is read on every call, so values changed after
/// provisioning are picked up. Variables whose name or value is not valid
/// UTF-8 are ignored.
pub struct Service {
    prefix: Option<String>,
    keys: Vec<String>,
    strip_prefix: bool,
}

impl Service {
    #[must_use]
    pub fn from_config(cfg: EnvSecretsPluginConfig) -> Self {
        Self {
            prefix: cfg.prefix.filter(|p| !p.is_empty()),
            keys: cfg.keys,
            strip_prefix: cfg.strip_prefix,
        }
    }

    /// Builds the bundle from the current environment.
    ///
    /// Explicit `keys` win over prefixed variables mapping to the same name.
    #[must_use]
    pub fn collect(&self) -> SecretBundle {
        let mut bundle = SecretBundle::new();

        if let Some(prefix) = &self.prefix {
            for (name, value) in std::env::vars_os() {
                let (Some(name), Some(value)) = (name.to_str(), value.to_str()) else {
                    continue;
                };
                let Some(rest) = name.strip_prefix(prefix.as_str()) else {
                    continue;
                };
                let key = if self.strip_prefix { rest } else { name };
                if key.is_empty() {
                    continue;
                }
                bundle.insert(key.to_owned(), Value::String(value.to_owned()));
            }
        }

        for key in &self.keys {
            if let Ok(value) = std::env::var(key) {
                bundle.insert(key.clone(), Value::String(value));
            }
        }

        bundle
    }
}
