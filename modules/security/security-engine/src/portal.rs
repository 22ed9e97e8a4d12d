use crate::config::PortalConfig;

/// Named authentication entry point.
///
/// Credential verification belongs to the portal engine; the server only
/// keeps the portal's identity and its settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Portal {
    name: String,
    settings: serde_json::Map<String, serde_json::Value>,
}

impl Portal {
    #[must_use]
    pub fn from_config(cfg: PortalConfig) -> Self {
        Self {
            name: cfg.name,
            settings: cfg.settings,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn settings(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.settings
    }
}
