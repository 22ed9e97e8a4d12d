use crate::config::GatekeeperConfig;

/// Named authorization enforcer.
#[derive(Debug, Clone, PartialEq)]
pub struct Gatekeeper {
    name: String,
    settings: serde_json::Map<String, serde_json::Value>,
}

impl Gatekeeper {
    #[must_use]
    pub fn from_config(cfg: GatekeeperConfig) -> Self {
        Self {
            name: cfg.name,
            settings: cfg.settings,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Policy settings, as declared.
    #[must_use]
    pub fn settings(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.settings
    }
}
