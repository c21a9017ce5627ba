//! Records service

use crate::{
    error::{AppError, AppResult},
    models::Record,
    repository::{IdStrategy, Repository},
};

#[derive(Clone)]
pub struct RecordsService {
    repository: Repository,
    id_strategy: IdStrategy,
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Record {} not found", id))
}

impl RecordsService {
    pub fn new(repository: Repository, id_strategy: IdStrategy) -> Self {
        Self {
            repository,
            id_strategy,
        }
    }

    pub fn list(&self) -> AppResult<Vec<Record>> {
        self.repository.records.list_all()
    }

    pub fn get_by_id(&self, id: i64) -> AppResult<Record> {
        self.repository
            .records
            .find_by_id(id)?
            .ok_or_else(|| not_found(id))
    }

    /// Create a record with the next id. The name must already be validated.
    pub fn create(&self, name: String) -> AppResult<Record> {
        let record = self.repository.records.insert(name, self.id_strategy)?;
        tracing::info!("Created record {}", record.id);
        Ok(record)
    }

    /// Overwrite the name of an existing record
    pub fn rename(&self, id: i64, name: String) -> AppResult<Record> {
        let record = self
            .repository
            .records
            .rename(id, name)?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Renamed record {}", id);
        Ok(record)
    }

    /// Remove a record, returning it
    pub fn delete(&self, id: i64) -> AppResult<Record> {
        let record = self
            .repository
            .records
            .remove(id)?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Deleted record {}", id);
        Ok(record)
    }
}
