//! Server configuration: a YAML file overlaid with `CW_`-prefixed
//! environment variables.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use modkit::ConfigProvider;
use modkit::plugins::DRIVER_KEY;
use serde::{Deserialize, Serialize};

/// Prefix of environment overrides; nested keys are separated by `__`,
/// e.g. `CW_LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "CW_";

/// Placeholder for plugin settings hidden by [`AppConfig::redacted`].
pub const REDACTED: &str = "<redacted>";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,

    /// Raw per-module sections keyed by module name.
    pub modules: HashMap<String, serde_json::Value>,
}

impl AppConfig {
    /// Loads the configuration from `path` (if any) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist or the merged
    /// configuration does not have the expected shape.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file '{}' not found", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load server configuration")
    }

    /// Copy safe to print: every secrets manager setting except the driver
    /// is replaced with [`REDACTED`].
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut out = self.clone();
        for section in out.modules.values_mut() {
            let Some(managers) = section
                .pointer_mut("/config/secrets_managers")
                .and_then(serde_json::Value::as_array_mut)
            else {
                continue;
            };
            for block in managers.iter_mut().filter_map(serde_json::Value::as_object_mut) {
                for (key, value) in block {
                    if key != DRIVER_KEY {
                        *value = serde_json::Value::String(REDACTED.to_owned());
                    }
                }
            }
        }
        out
    }
}

impl ConfigProvider for AppConfig {
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.modules.get(module_name)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;

    use super::*;
    use serde_json::json;

    const SAMPLE: &str = r#"
logging:
  level: debug
modules:
  security:
    config:
      secrets_managers:
        - driver: static
          secrets:
            api_key: sk-file
      config:
        portals:
          - name: public
            listen: "0.0.0.0:8443"
        gatekeepers:
          - name: admin
"#;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_yaml_file() {
        let file = write_config(SAMPLE);

        let cfg = temp_env::with_vars_unset(["CW_LOGGING__LEVEL", "CW_LOGGING__JSON"], || {
            AppConfig::load(Some(file.path())).unwrap()
        });

        assert_eq!(cfg.logging.level, "debug");
        assert!(!cfg.logging.json);

        let section = cfg.get_module_config("security").unwrap();
        assert_eq!(
            section["config"]["secrets_managers"][0]["secrets"]["api_key"],
            json!("sk-file")
        );
        assert_eq!(
            modkit::config::module_settings(&cfg, "security")["config"]["portals"][0]["name"],
            json!("public")
        );
        assert!(cfg.get_module_config("other").is_none());
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_config(SAMPLE);

        let cfg = temp_env::with_vars(
            [
                ("CW_LOGGING__LEVEL", Some("warn")),
                ("CW_LOGGING__JSON", Some("true")),
            ],
            || AppConfig::load(Some(file.path())).unwrap(),
        );

        assert_eq!(cfg.logging.level, "warn");
        assert!(cfg.logging.json);
    }

    #[test]
    fn no_file_yields_defaults() {
        let cfg = temp_env::with_vars_unset(["CW_LOGGING__LEVEL", "CW_LOGGING__JSON"], || {
            AppConfig::load(None).unwrap()
        });

        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.modules.is_empty());
    }

    #[test]
    fn redacted_hides_secrets_manager_settings() {
        let mut cfg = AppConfig::default();
        cfg.modules.insert(
            "security".to_owned(),
            json!({
                "config": {
                    "secrets_managers": [
                        { "driver": "static", "secrets": { "api_key": "sk-file" } },
                        { "driver": "vault", "address": "http://v", "path": "p", "token": "s.root" }
                    ],
                    "config": { "portals": [{ "name": "public" }] }
                }
            }),
        );

        let printed = serde_json::to_string(&cfg.redacted()).unwrap();

        assert!(!printed.contains("sk-file"));
        assert!(!printed.contains("s.root"));
        assert!(printed.contains(r#""driver":"vault""#));
        assert!(printed.contains("public"));
        assert_eq!(
            cfg.redacted().modules["security"]["config"]["secrets_managers"][0]["secrets"],
            json!(REDACTED)
        );
        // The original stays intact.
        assert_eq!(
            cfg.modules["security"]["config"]["secrets_managers"][1]["token"],
            json!("s.root")
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/cw-security.yaml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn wrong_shape_is_an_error() {
        let file = write_config("modules: [security]\n");
        assert!(AppConfig::load(Some(file.path())).is_err());
    }
}
