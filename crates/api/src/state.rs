use std::sync::Arc;

use infra::{CrmStore, MemoryStore};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CrmStore>,
    config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn CrmStore>, config: AppConfig) -> Self {
        Self { store, config }
    }

    /// State backed by a fresh [`MemoryStore`] and default configuration.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), AppConfig::default())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
