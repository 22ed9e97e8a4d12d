//! Security App Module
//!
//! Implements the `security` module that:
//! 1. Loads the secrets manager plugins declared under `secrets_managers`
//!    through a typed, driver-keyed registry
//! 2. Builds the security server (portals and gatekeepers) from `config`
//! 3. Publishes both as one immutable record at the end of provisioning
//! 4. Serves name lookups of portals and gatekeepers to request handlers
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use config::SecurityAppConfig;
pub use domain::{ProvisionError, SecurityError};
pub use module::{APP_NAME, SecurityApp};
