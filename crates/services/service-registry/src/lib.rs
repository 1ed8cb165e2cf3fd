#![deny(unsafe_code)]
//! service-registry - pluggable service instantiation for the meshmarket node
//!
//! Maps a service type string to a factory so a node can construct whichever
//! services its configuration enables. The registry is built once at startup
//! and handed to consumers by reference; there is no global table, and the
//! order in which factories are registered does not matter.

use std::collections::HashMap;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when instantiating services
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unsupported service type: {0}")]
    UnsupportedServiceType(String),

    #[error("Invalid service options: {0}")]
    InvalidOptions(String),
}

/// Startup configuration for one service instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Registered type of the service to construct
    pub service_type: String,

    /// Service-type specific options as free-form JSON
    #[serde(default)]
    pub options: serde_json::Value,
}

/// A running (or runnable) service instance.
pub trait Service: Send + Sync {
    /// Type under which the service was registered
    fn service_type(&self) -> String;

    /// Start serving
    fn start(&mut self) -> Result<(), RegistryError>;

    /// Stop serving
    fn stop(&mut self) -> Result<(), RegistryError>;
}

/// Constructor for a service instance.
pub type ServiceFactory =
    Box<dyn Fn(&ServiceConfig) -> Result<Box<dyn Service>, RegistryError> + Send + Sync>;

/// Table of all pluggable service factories.
pub struct ServiceRegistry {
    factories: HashMap<String, ServiceFactory>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory for a service type. A later registration for the
    /// same type replaces the earlier one.
    pub fn register(&mut self, service_type: impl Into<String>, factory: ServiceFactory) {
        let service_type = service_type.into();
        debug!("Registering service factory for type {}", service_type);
        self.factories.insert(service_type, factory);
    }

    /// Construct a service instance for the given configuration.
    ///
    /// Fails with [`RegistryError::UnsupportedServiceType`] when no factory
    /// is registered under the configured type.
    pub fn create(&self, config: &ServiceConfig) -> Result<Box<dyn Service>, RegistryError> {
        let factory = self
            .factories
            .get(&config.service_type)
            .ok_or_else(|| RegistryError::UnsupportedServiceType(config.service_type.clone()))?;

        info!("Creating service of type {}", config.service_type);
        factory(config)
    }

    /// Service types with a registered factory, in no particular order.
    pub fn supported_types(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
