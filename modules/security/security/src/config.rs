use serde::Deserialize;

use security_engine::ServerConfig;

/// Module configuration (`modules.security.config`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecurityAppConfig {
    /// Server topology, handed to the server constructor as is.
    pub config: ServerConfig,

    /// Declared secrets manager plugins, in load order. Each block carries
    /// a `driver` field selecting its factory.
    pub secrets_managers: Vec<serde_json::Value>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn config_is_parsed() {
        let yaml = r#"
config:
  portals:
    - name: default
  gatekeepers:
    - name: api
secrets_managers:
  - driver: vault
    address: "https://vault.local:8200"
  - driver: env
    prefix: APP_
"#;

        let cfg: SecurityAppConfig = serde_saphyr::from_str(yaml).unwrap();

        assert_eq!(cfg.config.portals[0].name, "default");
        assert_eq!(cfg.config.gatekeepers[0].name, "api");
        assert_eq!(cfg.secrets_managers.len(), 2);
        assert_eq!(cfg.secrets_managers[0]["driver"], "vault");
        assert_eq!(cfg.secrets_managers[1]["driver"], "env");
    }

    #[test]
    fn config_defaults_to_empty() {
        let cfg: SecurityAppConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(cfg.secrets_managers.is_empty());
        assert!(cfg.config.portals.is_empty());
    }

    #[test]
    fn config_rejects_unknown_fields() {
        let parsed: Result<SecurityAppConfig, _> = serde_saphyr::from_str("secrets: []");
        assert!(parsed.is_err());
    }
}
