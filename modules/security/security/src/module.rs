//! Security app module.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use modkit::{ConfigError, Module, ModuleCtx};
use security_engine::{Gatekeeper, Portal, Server};
use security_sdk::{SecretsManager, SecretsPluginRegistry};
use tracing::{debug, error, info};

use crate::config::SecurityAppConfig;
use crate::domain::{ProvisionError, Provisioned, Ready, SecurityError};

/// Fixed name of the app; also its configuration key.
pub const APP_NAME: &str = "security";

/// Security app.
///
/// Provisioning loads the declared secrets manager plugins, builds the
/// server, and publishes both at once. An app is provisioned at most once:
/// after a failed attempt it stays unusable. Lookups on an app that is not
/// ready fail with [`SecurityError::NotProvisioned`].
pub struct SecurityApp {
    name: &'static str,
    secrets_registry: SecretsPluginRegistry,
    state: OnceLock<Provisioned>,
}

impl SecurityApp {
    /// Creates an unprovisioned app resolving secrets manager drivers from
    /// `secrets_registry`.
    #[must_use]
    pub fn new(secrets_registry: SecretsPluginRegistry) -> Self {
        Self {
            name: APP_NAME,
            secrets_registry,
            state: OnceLock::new(),
        }
    }

    /// Provisions the app from an already parsed configuration.
    ///
    /// # Errors
    ///
    /// - `AlreadyProvisioned` after a successful provisioning
    /// - `PreviouslyFailed` after a failed one
    /// - `LoadPlugins` if any declared secrets manager cannot be loaded
    /// - `Server` if the server topology is invalid
    pub fn provision_with(&self, cfg: SecurityAppConfig) -> Result<(), ProvisionError> {
        self.provision_from(|| Ok(cfg))
    }

    /// Single provisioning path: the configuration is read after the start
    /// event so every failure is logged and recorded.
    fn provision_from<F>(&self, read_config: F) -> Result<(), ProvisionError>
    where
        F: FnOnce() -> Result<SecurityAppConfig, ConfigError>,
    {
        if let Some(state) = self.state.get() {
            return Err(match state {
                Provisioned::Ready(_) => ProvisionError::AlreadyProvisioned { app: self.name },
                Provisioned::Failed => ProvisionError::PreviouslyFailed { app: self.name },
            });
        }

        info!(app = self.name, "provisioning app instance");

        let ready = match self.build(read_config) {
            Ok(ready) => ready,
            Err(e) => {
                if self.state.set(Provisioned::Failed).is_err() {
                    debug!(app = self.name, "concurrent provisioning already recorded an outcome");
                }
                return Err(e);
            }
        };

        self.state
            .set(Provisioned::Ready(ready))
            .map_err(|_| ProvisionError::AlreadyProvisioned { app: self.name })?;

        info!(app = self.name, "provisioned app instance");
        Ok(())
    }

    fn build<F>(&self, read_config: F) -> Result<Ready, ProvisionError>
    where
        F: FnOnce() -> Result<SecurityAppConfig, ConfigError>,
    {
        let cfg = read_config().map_err(|source| {
            error!(app = self.name, error = %source, "app failed reading its configuration");
            ProvisionError::Config {
                app: self.name,
                source,
            }
        })?;

        let secrets_managers = self
            .secrets_registry
            .load(&cfg.secrets_managers)
            .map_err(|source| {
                error!(app = self.name, error = %source, "app failed loading secrets manager plugins");
                ProvisionError::LoadPlugins {
                    app: self.name,
                    source,
                }
            })?;

        let server = Server::new(cfg.config).map_err(|source| {
            error!(app = self.name, error = %source, "failed provisioning app server instance");
            ProvisionError::Server {
                app: self.name,
                source,
            }
        })?;

        Ok(Ready {
            secrets_managers,
            server,
        })
    }

    /// Whether provisioning succeeded.
    #[must_use]
    pub fn is_provisioned(&self) -> bool {
        matches!(self.state.get(), Some(Provisioned::Ready(_)))
    }

    fn ready(&self) -> Result<&Ready, SecurityError> {
        match self.state.get() {
            Some(Provisioned::Ready(ready)) => Ok(ready),
            Some(Provisioned::Failed) | None => Err(SecurityError::NotProvisioned { app: self.name }),
        }
    }

    /// Live secrets managers in declaration order.
    ///
    /// # Errors
    ///
    /// Returns `NotProvisioned` before successful provisioning.
    pub fn secrets_managers(&self) -> Result<&[Arc<dyn SecretsManager>], SecurityError> {
        Ok(&self.ready()?.secrets_managers)
    }

    /// Looks up a portal by name.
    ///
    /// # Errors
    ///
    /// - `NotProvisioned` before successful provisioning
    /// - `Lookup(PortalNotFound)` for unregistered names
    pub fn portal(&self, name: &str) -> Result<Arc<Portal>, SecurityError> {
        Ok(self.ready()?.server.portal_by_name(name)?)
    }

    /// Looks up a gatekeeper by name.
    ///
    /// # Errors
    ///
    /// - `NotProvisioned` before successful provisioning
    /// - `Lookup(GatekeeperNotFound)` for unregistered names
    pub fn gatekeeper(&self, name: &str) -> Result<Arc<Gatekeeper>, SecurityError> {
        Ok(self.ready()?.server.gatekeeper_by_name(name)?)
    }
}

#[async_trait]
impl Module for SecurityApp {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn provision(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
        self.provision_from(|| ctx.config())?;
        Ok(())
    }

    async fn start(&self) -> anyhow::Result<()> {
        debug!(app = self.name, "started app instance");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        debug!(app = self.name, "stopped app instance");
        Ok(())
    }
}
