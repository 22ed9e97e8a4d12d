//! Module context passed to [`crate::Module::provision`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

/// Errors raised while reading a module's configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration for module '{module}': {source}")]
    Invalid {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-module context.
///
/// Carries the module name, the module's raw settings and the host's root
/// cancellation token.
#[derive(Debug, Clone)]
pub struct ModuleCtx {
    module_name: Arc<str>,
    raw_config: serde_json::Value,
    cancellation_token: CancellationToken,
}

impl ModuleCtx {
    #[must_use]
    pub fn new(
        module_name: impl Into<Arc<str>>,
        raw_config: serde_json::Value,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            raw_config,
            cancellation_token,
        }
    }

    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    #[must_use]
    pub fn raw_config(&self) -> &serde_json::Value {
        &self.raw_config
    }

    #[must_use]
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }

    /// Deserializes the module settings into `T`.
    ///
    /// Absent settings (`null`) produce `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the settings do not match `T`.
    pub fn config<T>(&self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + Default,
    {
        if self.raw_config.is_null() {
            return Ok(T::default());
        }

        T::deserialize(&self.raw_config).map_err(|source| ConfigError::Invalid {
            module: self.module_name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct SampleConfig {
        vendor: String,
        priority: i16,
    }

    fn ctx(raw: serde_json::Value) -> ModuleCtx {
        ModuleCtx::new("sample", raw, CancellationToken::new())
    }

    #[test]
    fn null_config_falls_back_to_default() {
        let cfg: SampleConfig = ctx(serde_json::Value::Null).config().unwrap();
        assert!(cfg.vendor.is_empty());
        assert_eq!(cfg.priority, 0);
    }

    #[test]
    fn config_is_deserialized() {
        let cfg: SampleConfig = ctx(json!({ "vendor": "acme", "priority": 7 }))
            .config()
            .unwrap();
        assert_eq!(cfg.vendor, "acme");
        assert_eq!(cfg.priority, 7);
    }

    #[test]
    fn invalid_config_names_the_module() {
        let err = ctx(json!({ "unexpected": true }))
            .config::<SampleConfig>()
            .unwrap_err();

        let ConfigError::Invalid { module, .. } = &err;
        assert_eq!(module, "sample");
        assert!(err.to_string().contains("module 'sample'"));
    }
}
