use serde::Deserialize;

/// Plugin configuration.
///
/// At least one of `prefix` or `keys` must be set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvSecretsPluginConfig {
    /// Every variable starting with this prefix is part of the bundle.
    pub prefix: Option<String>,

    /// Variables read by exact name. Unset variables are skipped.
    pub keys: Vec<String>,

    /// Drop `prefix` from the names of prefixed variables.
    pub strip_prefix: bool,
}

impl Default for EnvSecretsPluginConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            keys: Vec::new(),
            strip_prefix: true,
        }
    }
}

impl EnvSecretsPluginConfig {
    /// # Errors
    ///
    /// Returns an error if neither a non-empty `prefix` nor any `keys` are
    /// configured.
    pub fn validate(&self) -> anyhow::Result<()> {
        let has_prefix = self.prefix.as_deref().is_some_and(|p| !p.is_empty());
        if !has_prefix && self.keys.is_empty() {
            anyhow::bail!("either a non-empty 'prefix' or a list of 'keys' is required");
        }
        Ok(())
    }
}
