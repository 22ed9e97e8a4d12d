//! Security engine
//!
//! The [`Server`] owns two independent, immutable name-keyed registries:
//!
//! - [`Portal`] - authentication entry points
//! - [`Gatekeeper`] - authorization enforcers
//!
//! A portal and a gatekeeper may share a name. Both registries are built
//! once by [`Server::new`] and only read afterwards, so a `Server` can be
//! shared across request handlers without locking.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod error;
pub mod gatekeeper;
pub mod portal;
pub mod server;

pub use config::{GatekeeperConfig, PortalConfig, ServerConfig};
pub use error::{LookupError, ServerError};
pub use gatekeeper::Gatekeeper;
pub use portal::Portal;
pub use server::Server;
