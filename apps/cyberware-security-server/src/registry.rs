use env_secrets_plugin::EnvSecretsPluginFactory;
use modkit::RegistryError;
use security_sdk::{SecretsPluginRegistry, secrets_plugin_registry};
use static_secrets_plugin::StaticSecretsPluginFactory;
use vault_secrets_plugin::VaultSecretsPluginFactory;

/// Secrets manager drivers compiled into this server.
///
/// # Errors
///
/// Returns an error if two factories claim the same driver.
pub fn secrets_registry() -> Result<SecretsPluginRegistry, RegistryError> {
    secrets_plugin_registry()
        .with(StaticSecretsPluginFactory)?
        .with(EnvSecretsPluginFactory)?
        .with(VaultSecretsPluginFactory)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn all_drivers_are_registered() {
        let registry = secrets_registry().unwrap();
        let drivers: Vec<_> = registry.drivers().collect();
        assert_eq!(drivers, vec!["env", "static", "vault"]);
    }
}
