//! Record persistence.
//!
//! This module provides the storage seam for work records: a small
//! key-value abstraction namespaced by owner, an in-memory backend used by
//! the API and the tests, and the [`RecordRepository`] that serializes the
//! record collection through it.
//!
//! Collections are stored wholesale as one JSON document per
//! `(owner, collection)` pair, mirroring the reference behavior of keeping
//! each user's records under a single namespaced key.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{EngineError, EngineResult};
use crate::models::WorkRecord;

/// The collection name under which work records are stored.
pub const RECORDS_COLLECTION: &str = "work_records";

/// A namespaced key-value store for JSON documents.
///
/// Keys are `(owner, collection)` pairs so that multiple users can share a
/// backend without seeing each other's data. Implementations must be safe
/// to share across threads.
pub trait KeyValueStore: Send + Sync {
    /// Reads the document stored under `(owner, collection)`, if any.
    fn get(&self, owner: &str, collection: &str) -> EngineResult<Option<serde_json::Value>>;

    /// Writes the document under `(owner, collection)`, replacing any
    /// previous value.
    fn put(&self, owner: &str, collection: &str, value: serde_json::Value) -> EngineResult<()>;
}

/// An in-memory [`KeyValueStore`] backed by a `RwLock`ed map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<(String, String), serde_json::Value>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, owner: &str, collection: &str) -> EngineResult<Option<serde_json::Value>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| EngineError::StoreReadError {
                owner: owner.to_string(),
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        Ok(entries
            .get(&(owner.to_string(), collection.to_string()))
            .cloned())
    }

    fn put(&self, owner: &str, collection: &str, value: serde_json::Value) -> EngineResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| EngineError::StoreWriteError {
                owner: owner.to_string(),
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        entries.insert((owner.to_string(), collection.to_string()), value);
        Ok(())
    }
}

/// Repository for one owner's work record collection.
///
/// Reads and writes go through the underlying [`KeyValueStore`]; records are
/// kept as a single JSON array so the stored shape matches what a record
/// export produces.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use wagebook::store::{MemoryStore, RecordRepository};
///
/// let repository = RecordRepository::new(Arc::new(MemoryStore::new()), "budi");
/// assert!(repository.load().unwrap().is_empty());
/// ```
pub struct RecordRepository {
    store: Arc<dyn KeyValueStore>,
    owner: String,
}

impl RecordRepository {
    /// Creates a repository for the given owner.
    pub fn new(store: Arc<dyn KeyValueStore>, owner: impl Into<String>) -> Self {
        Self {
            store,
            owner: owner.into(),
        }
    }

    /// Returns the owner this repository is namespaced to.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Loads the full record collection, empty if nothing has been stored.
    pub fn load(&self) -> EngineResult<Vec<WorkRecord>> {
        let Some(value) = self.store.get(&self.owner, RECORDS_COLLECTION)? else {
            return Ok(Vec::new());
        };

        serde_json::from_value(value).map_err(|e| EngineError::SerializationError {
            message: e.to_string(),
        })
    }

    /// Replaces the stored collection wholesale.
    pub fn save(&self, records: &[WorkRecord]) -> EngineResult<()> {
        let value =
            serde_json::to_value(records).map_err(|e| EngineError::SerializationError {
                message: e.to_string(),
            })?;

        self.store.put(&self.owner, RECORDS_COLLECTION, value)
    }

    /// Appends a record to the collection.
    pub fn insert(&self, record: WorkRecord) -> EngineResult<()> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }

    /// Replaces the record with the given id wholesale, keeping its
    /// position in the collection.
    pub fn replace(&self, id: &str, record: WorkRecord) -> EngineResult<WorkRecord> {
        let mut records = self.load()?;

        let slot = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::RecordNotFound { id: id.to_string() })?;
        *slot = record.clone();

        self.save(&records)?;
        Ok(record)
    }

    /// Removes the record with the given id.
    pub fn remove(&self, id: &str) -> EngineResult<()> {
        let mut records = self.load()?;

        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(EngineError::RecordNotFound { id: id.to_string() });
        }

        self.save(&records)
    }

    /// Finds a record by id.
    pub fn find(&self, id: &str) -> EngineResult<WorkRecord> {
        self.load()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::RecordNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionInput;
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn record(id: &str, hours: u32) -> WorkRecord {
        WorkRecord {
            id: id.to_string(),
            date: NaiveDateTime::parse_from_str("2026-01-05 09:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            input: SessionInput::Duration { hours, minutes: 0 },
            rate: Decimal::from_str("10000").unwrap(),
            wage_override: None,
        }
    }

    fn repository() -> RecordRepository {
        RecordRepository::new(Arc::new(MemoryStore::new()), "budi")
    }

    #[test]
    fn test_load_empty_store() {
        let repository = repository();
        assert!(repository.load().unwrap().is_empty());
    }

    #[test]
    fn test_insert_and_load_round_trip() {
        let repository = repository();
        repository.insert(record("rec_001", 8)).unwrap();
        repository.insert(record("rec_002", 4)).unwrap();

        let records = repository.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "rec_001");
        assert_eq!(records[1].id, "rec_002");
    }

    #[test]
    fn test_replace_keeps_position() {
        let repository = repository();
        repository.insert(record("rec_001", 8)).unwrap();
        repository.insert(record("rec_002", 4)).unwrap();

        let replaced = repository.replace("rec_001", record("rec_001", 6)).unwrap();
        assert_eq!(replaced.total_hours(), Decimal::from(6));

        let records = repository.load().unwrap();
        assert_eq!(records[0].id, "rec_001");
        assert_eq!(records[0].total_hours(), Decimal::from(6));
        assert_eq!(records[1].id, "rec_002");
    }

    #[test]
    fn test_replace_missing_record_returns_error() {
        let repository = repository();
        let result = repository.replace("ghost", record("ghost", 1));

        match result {
            Err(EngineError::RecordNotFound { id }) => assert_eq!(id, "ghost"),
            other => panic!("Expected RecordNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_record() {
        let repository = repository();
        repository.insert(record("rec_001", 8)).unwrap();
        repository.insert(record("rec_002", 4)).unwrap();

        repository.remove("rec_001").unwrap();
        let records = repository.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "rec_002");
    }

    #[test]
    fn test_remove_missing_record_returns_error() {
        let repository = repository();
        let result = repository.remove("ghost");
        assert!(matches!(
            result,
            Err(EngineError::RecordNotFound { id }) if id == "ghost"
        ));
    }

    #[test]
    fn test_find_record() {
        let repository = repository();
        repository.insert(record("rec_001", 8)).unwrap();

        let found = repository.find("rec_001").unwrap();
        assert_eq!(found.id, "rec_001");
        assert!(repository.find("ghost").is_err());
    }

    #[test]
    fn test_owners_are_isolated() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let budi = RecordRepository::new(Arc::clone(&store), "budi");
        let sari = RecordRepository::new(Arc::clone(&store), "sari");

        budi.insert(record("rec_001", 8)).unwrap();
        assert_eq!(budi.load().unwrap().len(), 1);
        assert!(sari.load().unwrap().is_empty());
    }
}
