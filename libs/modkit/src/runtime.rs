//! Host runtime driving an explicitly composed list of modules.

use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::{ConfigProvider, module_settings};
use crate::context::ModuleCtx;
use crate::module::Module;

/// Runs the lifecycle of a fixed list of modules.
///
/// Modules are provisioned and started in list order and stopped in reverse
/// order. The first provisioning failure aborts the run before any module is
/// started.
pub struct HostRuntime {
    modules: Vec<Arc<dyn Module>>,
    config: Arc<dyn ConfigProvider>,
    cancellation_token: CancellationToken,
}

/// Builder for [`HostRuntime`].
pub struct HostRuntimeBuilder {
    modules: Vec<Arc<dyn Module>>,
    config: Arc<dyn ConfigProvider>,
    cancellation_token: CancellationToken,
}

impl HostRuntimeBuilder {
    #[must_use]
    pub fn module(mut self, module: Arc<dyn Module>) -> Self {
        self.modules.push(module);
        self
    }

    #[must_use]
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = token;
        self
    }

    #[must_use]
    pub fn build(self) -> HostRuntime {
        HostRuntime {
            modules: self.modules,
            config: self.config,
            cancellation_token: self.cancellation_token,
        }
    }
}

impl HostRuntime {
    #[must_use]
    pub fn builder(config: Arc<dyn ConfigProvider>) -> HostRuntimeBuilder {
        HostRuntimeBuilder {
            modules: Vec::new(),
            config,
            cancellation_token: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }

    /// Provisions every module in order.
    ///
    /// # Errors
    ///
    /// Returns the first module's provisioning error; later modules are not
    /// provisioned.
    pub async fn provision_all(&self) -> anyhow::Result<()> {
        for module in &self.modules {
            let name = module.name();
            let ctx = ModuleCtx::new(
                name,
                module_settings(self.config.as_ref(), name),
                self.cancellation_token.child_token(),
            );
            module
                .provision(&ctx)
                .await
                .with_context(|| format!("module '{name}' failed to provision"))?;
        }
        Ok(())
    }

    /// Starts every module in order.
    ///
    /// # Errors
    ///
    /// Returns the first module's start error.
    pub async fn start_all(&self) -> anyhow::Result<()> {
        self.start_modules().await.map_err(|(_, e)| e)
    }

    /// Starts modules in order. On failure returns how many modules were
    /// started before the failing one.
    async fn start_modules(&self) -> Result<(), (usize, anyhow::Error)> {
        for (started, module) in self.modules.iter().enumerate() {
            let name = module.name();
            if let Err(e) = module.start().await {
                return Err((started, e.context(format!("module '{name}' failed to start"))));
            }
        }
        Ok(())
    }

    /// Stops every module in reverse order.
    ///
    /// Stop failures are logged and do not prevent the remaining modules
    /// from stopping.
    pub async fn stop_all(&self) {
        self.stop_modules(self.modules.len()).await;
    }

    /// Stops the first `count` modules in reverse order.
    async fn stop_modules(&self, count: usize) {
        for module in self.modules.iter().take(count).rev() {
            if let Err(e) = module.stop().await {
                error!(module = module.name(), error = %format!("{e:#}"), "Module failed to stop");
            }
        }
    }

    /// Provisions and starts all modules, waits for cancellation, then stops
    /// them.
    ///
    /// # Errors
    ///
    /// Returns the provisioning or start error that aborted the run.
    pub async fn run(self) -> anyhow::Result<()> {
        info!(modules = self.modules.len(), "Provisioning modules");
        self.provision_all().await?;

        if let Err((started, e)) = self.start_modules().await {
            self.stop_modules(started).await;
            return Err(e);
        }
        info!("All modules started");

        self.cancellation_token.cancelled().await;

        info!("Shutdown requested, stopping modules");
        self.stop_all().await;
        Ok(())
    }
}
