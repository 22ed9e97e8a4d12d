use secrecy::SecretString;
use serde::Deserialize;

/// Environment variable consulted when `token` is not configured.
pub const VAULT_TOKEN_ENV: &str = "VAULT_TOKEN";

/// Plugin configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VaultSecretsPluginConfig {
    /// Vault base address, e.g. `https://vault.local:8200`.
    pub address: String,

    /// Client token. Falls back to `VAULT_TOKEN` when absent.
    #[serde(default)]
    pub token: Option<SecretString>,

    /// KV v2 mount point.
    #[serde(default = "default_mount")]
    pub mount: String,

    /// Secret path below the mount.
    pub path: String,

    /// Enterprise namespace, sent as `X-Vault-Namespace`.
    #[serde(default)]
    pub namespace: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mount() -> String {
    "secret".to_owned()
}

fn default_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn config_defaults_are_applied() {
        let yaml = r#"
address: "https://vault.local:8200"
token: "s.root"
path: app/config
"#;

        let cfg: VaultSecretsPluginConfig = serde_saphyr::from_str(yaml).unwrap();

        assert_eq!(cfg.address, "https://vault.local:8200");
        assert_eq!(cfg.token.as_ref().unwrap().expose_secret(), "s.root");
        assert_eq!(cfg.mount, "secret");
        assert_eq!(cfg.path, "app/config");
        assert!(cfg.namespace.is_none());
        assert_eq!(cfg.timeout_secs, 10);
    }

    #[test]
    fn token_is_redacted_in_debug_output() {
        let cfg: VaultSecretsPluginConfig =
            serde_saphyr::from_str("address: http://v\ntoken: s.very-secret\npath: p\n").unwrap();
        assert!(!format!("{cfg:?}").contains("s.very-secret"));
    }

    #[test]
    fn path_is_required() {
        let parsed: Result<VaultSecretsPluginConfig, _> =
            serde_saphyr::from_str("address: http://v\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn config_rejects_unknown_fields() {
        let parsed: Result<VaultSecretsPluginConfig, _> =
            serde_saphyr::from_str("address: http://v\npath: p\nrole_id: x\n");
        assert!(parsed.is_err());
    }
}
