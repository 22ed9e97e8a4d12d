//! Provisioned state of the security app.

use std::sync::Arc;

use security_engine::Server;
use security_sdk::SecretsManager;

/// Everything provisioning produces.
///
/// Built completely before it is published, then only read.
pub struct Ready {
    pub secrets_managers: Vec<Arc<dyn SecretsManager>>,
    pub server: Server,
}

impl std::fmt::Debug for Ready {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ready")
            .field("secrets_managers", &self.secrets_managers.len())
            .field("server", &self.server)
            .finish()
    }
}

/// Outcome of the one provisioning attempt an app gets.
#[derive(Debug)]
pub enum Provisioned {
    Ready(Ready),
    /// Provisioning failed; the app stays unusable.
    Failed,
}
