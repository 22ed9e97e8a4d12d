//! Typed plugin registry.
//!
//! A registry serves one capability namespace (for example
//! `security.secrets`). Each declared plugin block is a JSON object whose
//! `driver` field selects the factory; the remaining fields are the
//! factory's settings. The product type of every factory is fixed by the
//! registry's type parameter, so a loaded plugin always satisfies the
//! capability the caller asked for.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

/// Name of the discriminator field in a declared plugin block.
pub const DRIVER_KEY: &str = "driver";

/// Builds one plugin instance from its settings.
pub trait PluginFactory<T: ?Sized>: Send + Sync {
    /// Driver name this factory answers to.
    fn driver(&self) -> &'static str;

    /// Creates a plugin from its settings (the declared block without the
    /// `driver` field).
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are malformed or the backend cannot
    /// be set up.
    fn create(&self, settings: serde_json::Value) -> anyhow::Result<Arc<T>>;
}

/// Errors raised while registering factories.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("driver '{driver}' is already registered in namespace '{namespace}'")]
    DuplicateDriver {
        namespace: &'static str,
        driver: &'static str,
    },
}

/// Errors raised while loading declared plugins.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("plugin #{index} in namespace '{namespace}' is not an object")]
    NotAnObject {
        namespace: &'static str,
        index: usize,
    },

    #[error("plugin #{index} in namespace '{namespace}' has no 'driver' field")]
    MissingDriver {
        namespace: &'static str,
        index: usize,
    },

    #[error("unknown driver '{driver}' in namespace '{namespace}'")]
    UnknownDriver {
        namespace: &'static str,
        driver: String,
    },

    #[error("plugin #{index} ('{namespace}.{driver}') rejected its configuration: {reason}")]
    InvalidConfig {
        namespace: &'static str,
        driver: String,
        index: usize,
        reason: String,
    },
}

/// Driver-keyed set of factories producing `Arc<T>`.
pub struct PluginRegistry<T: ?Sized> {
    namespace: &'static str,
    factories: BTreeMap<&'static str, Arc<dyn PluginFactory<T>>>,
}

impl<T: ?Sized + 'static> PluginRegistry<T> {
    #[must_use]
    pub fn new(namespace: &'static str) -> Self {
        Self {
            namespace,
            factories: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Adds a factory under its driver name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateDriver`] if the driver is taken.
    pub fn register<F>(&mut self, factory: F) -> Result<(), RegistryError>
    where
        F: PluginFactory<T> + 'static,
    {
        let driver = factory.driver();
        if self.factories.contains_key(driver) {
            return Err(RegistryError::DuplicateDriver {
                namespace: self.namespace,
                driver,
            });
        }
        self.factories.insert(driver, Arc::new(factory));
        Ok(())
    }

    /// Builder-style [`Self::register`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateDriver`] if the driver is taken.
    pub fn with<F>(mut self, factory: F) -> Result<Self, RegistryError>
    where
        F: PluginFactory<T> + 'static,
    {
        self.register(factory)?;
        Ok(self)
    }

    /// Registered driver names, sorted.
    pub fn drivers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    /// Instantiates every declared block, preserving declaration order.
    ///
    /// Loading stops at the first failing block.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] naming the offending block.
    pub fn load(&self, declared: &[serde_json::Value]) -> Result<Vec<Arc<T>>, LoadError> {
        let mut loaded = Vec::with_capacity(declared.len());

        for (index, raw) in declared.iter().enumerate() {
            let serde_json::Value::Object(mut settings) = raw.clone() else {
                return Err(LoadError::NotAnObject {
                    namespace: self.namespace,
                    index,
                });
            };

            let Some(serde_json::Value::String(driver)) = settings.remove(DRIVER_KEY) else {
                return Err(LoadError::MissingDriver {
                    namespace: self.namespace,
                    index,
                });
            };

            let factory =
                self.factories
                    .get(driver.as_str())
                    .ok_or_else(|| LoadError::UnknownDriver {
                        namespace: self.namespace,
                        driver: driver.clone(),
                    })?;

            let plugin = factory
                .create(serde_json::Value::Object(settings))
                .map_err(|e| LoadError::InvalidConfig {
                    namespace: self.namespace,
                    driver: driver.clone(),
                    index,
                    reason: format!("{e:#}"),
                })?;

            debug!(namespace = self.namespace, driver = %driver, index, "Loaded plugin");
            loaded.push(plugin);
        }

        Ok(loaded)
    }
}

impl<T: ?Sized> std::fmt::Debug for PluginRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("namespace", &self.namespace)
            .field("drivers", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
