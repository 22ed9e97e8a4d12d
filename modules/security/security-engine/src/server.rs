//! Security server.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::error::{LookupError, ServerError};
use crate::gatekeeper::Gatekeeper;
use crate::portal::Portal;

/// Owner of the portal and gatekeeper registries.
///
/// Registries are filled by [`Server::new`] and never written afterwards.
#[derive(Debug)]
pub struct Server {
    portals: HashMap<String, Arc<Portal>>,
    gatekeepers: HashMap<String, Arc<Gatekeeper>>,
}

impl Server {
    /// Validates the topology and builds both registries.
    ///
    /// # Errors
    ///
    /// - `EmptyPortalName` / `EmptyGatekeeperName` for blank names
    /// - `DuplicatePortal` / `DuplicateGatekeeper` when a name repeats
    ///   within its registry
    #[tracing::instrument(
        skip_all,
        fields(portals = config.portals.len(), gatekeepers = config.gatekeepers.len())
    )]
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let mut portals = HashMap::with_capacity(config.portals.len());
        for (index, cfg) in config.portals.into_iter().enumerate() {
            if cfg.name.trim().is_empty() {
                return Err(ServerError::EmptyPortalName { index });
            }
            match portals.entry(cfg.name.clone()) {
                Entry::Occupied(_) => {
                    return Err(ServerError::DuplicatePortal { name: cfg.name });
                }
                Entry::Vacant(slot) => {
                    debug!(portal = %cfg.name, "Registered portal");
                    slot.insert(Arc::new(Portal::from_config(cfg)));
                }
            }
        }

        let mut gatekeepers = HashMap::with_capacity(config.gatekeepers.len());
        for (index, cfg) in config.gatekeepers.into_iter().enumerate() {
            if cfg.name.trim().is_empty() {
                return Err(ServerError::EmptyGatekeeperName { index });
            }
            match gatekeepers.entry(cfg.name.clone()) {
                Entry::Occupied(_) => {
                    return Err(ServerError::DuplicateGatekeeper { name: cfg.name });
                }
                Entry::Vacant(slot) => {
                    debug!(gatekeeper = %cfg.name, "Registered gatekeeper");
                    slot.insert(Arc::new(Gatekeeper::from_config(cfg)));
                }
            }
        }

        info!("Security server built");
        Ok(Self {
            portals,
            gatekeepers,
        })
    }

    /// Looks up a portal by name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::PortalNotFound`] for unregistered names.
    pub fn portal_by_name(&self, name: &str) -> Result<Arc<Portal>, LookupError> {
        self.portals
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::PortalNotFound {
                name: name.to_owned(),
            })
    }

    /// Looks up a gatekeeper by name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::GatekeeperNotFound`] for unregistered names.
    pub fn gatekeeper_by_name(&self, name: &str) -> Result<Arc<Gatekeeper>, LookupError> {
        self.gatekeepers
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::GatekeeperNotFound {
                name: name.to_owned(),
            })
    }

    /// Registered portal names, sorted.
    #[must_use]
    pub fn portal_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.portals.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered gatekeeper names, sorted.
    #[must_use]
    pub fn gatekeeper_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.gatekeepers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
