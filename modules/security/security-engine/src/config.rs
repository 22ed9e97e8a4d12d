use serde::{Deserialize, Serialize};

/// Server topology.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Authentication portals, in declaration order.
    pub portals: Vec<PortalConfig>,

    /// Authorization gatekeepers, in declaration order.
    pub gatekeepers: Vec<GatekeeperConfig>,
}

/// A single portal entry.
///
/// Everything besides `name` is engine-specific and kept verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PortalConfig {
    pub name: String,

    #[serde(flatten)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

/// A single gatekeeper entry.
///
/// Everything besides `name` is engine-specific and kept verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GatekeeperConfig {
    pub name: String,

    #[serde(flatten)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl PortalConfig {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: serde_json::Map::new(),
        }
    }
}

impl GatekeeperConfig {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: serde_json::Map::new(),
        }
    }
}
