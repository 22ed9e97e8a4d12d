use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticSecretsPluginConfig {
    /// Secrets served by this plugin, keyed by secret name.
    pub secrets: serde_json::Map<String, serde_json::Value>,
}
