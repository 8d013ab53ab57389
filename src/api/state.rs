//! Application state for the practitioner salary API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, SalaryConfig};
use crate::error::EngineResult;
use crate::lookup::LookupService;
use crate::store::{ClassificationStore, InMemoryStore};

/// Shared application state.
///
/// Holds only immutable, shared resources; no per-session state lives here.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
    /// Lookups over the classification store.
    lookup: LookupService,
}

impl AppState {
    /// Creates application state backed by an in-memory store seeded from
    /// the configuration's classification rows.
    pub fn new(config: ConfigLoader) -> EngineResult<Self> {
        let store = InMemoryStore::new(config.records().to_vec())?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Creates application state over an arbitrary classification store.
    pub fn with_store(config: ConfigLoader, store: Arc<dyn ClassificationStore>) -> Self {
        Self {
            config: Arc::new(config),
            lookup: LookupService::new(store),
        }
    }

    /// Returns the salary constants.
    pub fn salary(&self) -> &SalaryConfig {
        self.config.salary()
    }

    /// Returns the lookup service.
    pub fn lookup(&self) -> &LookupService {
        &self.lookup
    }
}
