//! `ModKit` core library
//!
//! Building blocks shared by every module hosted in a Cyber Ware process:
//!
//! - [`Module`] - lifecycle contract (provision, start, stop)
//! - [`ModuleCtx`] - per-module context handed to `provision`
//! - [`plugins::PluginRegistry`] - typed, driver-keyed plugin factories
//! - [`runtime::HostRuntime`] - drives an explicitly composed module list
//! - [`config::ConfigProvider`] - source of raw per-module configuration
//!
//! Modules are never registered globally. The host binary builds the list of
//! modules and the plugin registries they need, then hands them to
//! [`runtime::HostRuntime`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod context;
pub mod module;
pub mod plugins;
pub mod runtime;

pub use config::ConfigProvider;
pub use context::{ConfigError, ModuleCtx};
pub use module::Module;
pub use plugins::{LoadError, PluginFactory, PluginRegistry, RegistryError};
pub use runtime::HostRuntime;
