//! Module lifecycle contract.

use async_trait::async_trait;

use crate::context::ModuleCtx;

/// A unit hosted by the runtime.
///
/// The host calls `provision`, `start` and `stop` once each, in that order,
/// and never concurrently. A failed `provision` makes the instance unusable;
/// `start` is then never called.
#[async_trait]
pub trait Module: Send + Sync {
    /// Fixed identifier of the module; also the key of its configuration
    /// section.
    fn name(&self) -> &'static str;

    /// Turns the module's declarative configuration into live state.
    async fn provision(&self, ctx: &ModuleCtx) -> anyhow::Result<()>;

    /// Called after every module has been provisioned.
    async fn start(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called on shutdown, in reverse start order.
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
