//! Repository layer for record storage

pub mod records;

use std::sync::Arc;

pub use records::{IdStrategy, InMemoryRecordStore, RecordStore};

use crate::config::StoreConfig;

/// Main repository struct holding the record store
#[derive(Clone)]
pub struct Repository {
    pub records: Arc<dyn RecordStore>,
}

impl Repository {
    /// Create a repository over an existing store
    pub fn new(records: Arc<dyn RecordStore>) -> Self {
        Self { records }
    }

    /// Create the in-memory repository described by the configuration
    pub fn in_memory(config: &StoreConfig) -> Self {
        let store = if config.seed {
            InMemoryRecordStore::seeded()
        } else {
            InMemoryRecordStore::new()
        };
        Self::new(Arc::new(store))
    }
}
