//! Business logic services

pub mod records;

use crate::{config::StoreConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub records: records::RecordsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, store_config: &StoreConfig) -> Self {
        Self {
            records: records::RecordsService::new(repository, store_config.id_strategy),
        }
    }
}
