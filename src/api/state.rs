//! Application state for the wage accounting API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::WagebookConfig;
use crate::store::RecordRepository;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// record repository and the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<RecordRepository>,
    config: Arc<WagebookConfig>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(repository: RecordRepository, config: WagebookConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the record repository.
    pub fn repository(&self) -> &RecordRepository {
        &self.repository
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &WagebookConfig {
        &self.config
    }
}
