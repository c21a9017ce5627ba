//! Record storage

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{record::seed_records, Record},
};

/// How the next record id is chosen on insert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// One past the highest id ever issued; ids are never reused
    #[default]
    Monotonic,
    /// Live record count plus one. Can hand out an id that is still live
    /// once records have been deleted.
    Length,
}

impl IdStrategy {
    pub fn next_id(self, live: usize, max_issued_id: i64) -> i64 {
        match self {
            IdStrategy::Monotonic => max_issued_id + 1,
            IdStrategy::Length => live as i64 + 1,
        }
    }
}

/// Storage operations on the ordered record collection.
///
/// Lookups are linear scans in insertion order; the first match wins.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore: Send + Sync {
    /// Every record, in insertion order
    fn list_all(&self) -> AppResult<Vec<Record>>;

    /// First record with the given id
    fn find_by_id(&self, id: i64) -> AppResult<Option<Record>>;

    /// Append a record at the end of the collection. Ids are not checked.
    fn append(&self, record: Record) -> AppResult<()>;

    /// Allocate an id and append a new record in one step
    fn insert(&self, name: String, strategy: IdStrategy) -> AppResult<Record>;

    /// Replace the name of the first record with the given id
    fn rename(&self, id: i64, name: String) -> AppResult<Option<Record>>;

    /// Remove the first record with the given id and return it
    fn remove(&self, id: i64) -> AppResult<Option<Record>>;
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<Record>,
    max_issued_id: i64,
}

impl Inner {
    fn push(&mut self, record: Record) {
        self.max_issued_id = self.max_issued_id.max(record.id);
        self.records.push(record);
    }
}

/// Process-lifetime in-memory store
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Inner>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entry1`..`entry5`
    pub fn seeded() -> Self {
        Self::with_records(seed_records())
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        let max_issued_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            inner: RwLock::new(Inner {
                records,
                max_issued_id,
            }),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| AppError::Internal("Record store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| AppError::Internal("Record store lock poisoned".to_string()))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list_all(&self) -> AppResult<Vec<Record>> {
        Ok(self.read()?.records.clone())
    }

    fn find_by_id(&self, id: i64) -> AppResult<Option<Record>> {
        Ok(self.read()?.records.iter().find(|r| r.id == id).cloned())
    }

    fn append(&self, record: Record) -> AppResult<()> {
        self.write()?.push(record);
        Ok(())
    }

    fn insert(&self, name: String, strategy: IdStrategy) -> AppResult<Record> {
        let mut inner = self.write()?;
        let id = strategy.next_id(inner.records.len(), inner.max_issued_id);
        let record = Record::new(id, name);
        inner.push(record.clone());
        Ok(record)
    }

    fn rename(&self, id: i64, name: String) -> AppResult<Option<Record>> {
        let mut inner = self.write()?;
        Ok(inner.records.iter_mut().find(|r| r.id == id).map(|record| {
            record.name = name;
            record.clone()
        }))
    }

    fn remove(&self, id: i64) -> AppResult<Option<Record>> {
        let mut inner = self.write()?;
        let position = inner.records.iter().position(|r| r.id == id);
        Ok(position.map(|idx| inner.records.remove(idx)))
    }
}
