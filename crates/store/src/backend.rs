//! The storage backend contract and the typed [`Store`] handle.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::StoreResult;
use crate::latency::Latency;

/// A durable key-value backend.
///
/// Writes are immediate and synchronous from the caller's perspective;
/// there is no batching or write-behind. Access is serialized inside each
/// implementation, so a single read-modify-write never interleaves with
/// another call from the same process.
pub trait StoreBackend: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &Value) -> StoreResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Handle over an injected [`StoreBackend`] with typed collection access,
/// first-access bootstrap seeding, and the shared latency switch.
///
/// Cloning is cheap; all clones share the same backend and seeds.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StoreBackend>,
    seeds: Arc<HashMap<String, Value>>,
    latency: Latency,
}

/// Builder for [`Store`] allowing seed registration and latency selection.
pub struct StoreBuilder {
    backend: Arc<dyn StoreBackend>,
    seeds: HashMap<String, Value>,
    latency: Latency,
}

impl StoreBuilder {
    /// Register the bootstrap dataset written to `collection` on first
    /// access when the collection is absent from the backend.
    pub fn seed(mut self, collection: impl Into<String>, records: Value) -> Self {
        self.seeds.insert(collection.into(), records);
        self
    }

    pub fn latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn build(self) -> Store {
        Store {
            backend: self.backend,
            seeds: Arc::new(self.seeds),
            latency: self.latency,
        }
    }
}

impl Store {
    /// A store with no registered seeds and latency disabled.
    pub fn new(backend: Arc<dyn StoreBackend>) -> Self {
        Self::builder(backend).build()
    }

    pub fn builder(backend: Arc<dyn StoreBackend>) -> StoreBuilder {
        StoreBuilder {
            backend,
            seeds: HashMap::new(),
            latency: Latency::none(),
        }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Load every record of `collection`.
    ///
    /// An absent collection is seeded with its registered bootstrap dataset
    /// (written through to the backend) or treated as empty. Malformed
    /// stored data is treated the same way, never surfaced as an error:
    /// leniency applies to reads only, write failures still propagate.
    pub fn load_collection<T: DeserializeOwned>(&self, collection: &str) -> StoreResult<Vec<T>> {
        match self.backend.get(collection)? {
            Some(value) => match serde_json::from_value::<Vec<T>>(value) {
                Ok(records) => Ok(records),
                Err(error) => {
                    warn!(collection, %error, "stored collection is malformed, falling back");
                    self.seed_collection(collection)
                }
            },
            None => self.seed_collection(collection),
        }
    }

    /// Replace the full contents of `collection`.
    pub fn save_collection<T: Serialize>(&self, collection: &str, records: &[T]) -> StoreResult<()> {
        let value = serde_json::to_value(records)?;
        self.backend.set(collection, &value)
    }

    /// Remove `collection` entirely. The next load seeds it afresh.
    pub fn remove_collection(&self, collection: &str) -> StoreResult<()> {
        self.backend.remove(collection)
    }

    /// Read the singleton record stored under `key`. Absent or malformed
    /// records read back as `None`.
    pub fn get_record<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.backend.get(key)? {
            Some(value) => match serde_json::from_value::<T>(value) {
                Ok(record) => Ok(Some(record)),
                Err(error) => {
                    warn!(key, %error, "stored record is malformed, treating as absent");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Write the singleton record stored under `key`.
    pub fn put_record<T: Serialize>(&self, key: &str, record: &T) -> StoreResult<()> {
        let value = serde_json::to_value(record)?;
        self.backend.set(key, &value)
    }

    /// Remove the singleton record stored under `key`. Idempotent.
    pub fn delete_record(&self, key: &str) -> StoreResult<()> {
        self.backend.remove(key)
    }

    fn seed_collection<T: DeserializeOwned>(&self, collection: &str) -> StoreResult<Vec<T>> {
        let Some(seed) = self.seeds.get(collection) else {
            return Ok(Vec::new());
        };

        self.backend.set(collection, seed)?;
        debug!(collection, "seeded collection with bootstrap dataset");

        match serde_json::from_value::<Vec<T>>(seed.clone()) {
            Ok(records) => Ok(records),
            Err(error) => {
                warn!(collection, %error, "registered seed does not match record type");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: String,
        label: String,
    }

    fn memory_store() -> Store {
        Store::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn absent_collection_without_seed_is_empty() {
        let store = memory_store();

        let records: Vec<Record> = store.load_collection("things").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let store = memory_store();
        let records = vec![
            Record {
                id: "1".into(),
                label: "first".into(),
            },
            Record {
                id: "2".into(),
                label: "second".into(),
            },
        ];

        store.save_collection("things", &records).unwrap();
        let loaded: Vec<Record> = store.load_collection("things").unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn first_access_writes_registered_seed_through() {
        let backend = Arc::new(MemoryStore::new());
        let store = Store::builder(backend.clone())
            .seed("things", json!([{"id": "1", "label": "seeded"}]))
            .build();

        let records: Vec<Record> = store.load_collection("things").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "seeded");

        // The seed must now be durable in the backend itself.
        let raw = backend.get("things").unwrap().expect("seed written through");
        assert_eq!(raw, json!([{"id": "1", "label": "seeded"}]));
    }

    #[test]
    fn malformed_collection_falls_back_to_seed() {
        let backend = Arc::new(MemoryStore::new());
        backend.set("things", &json!("not an array")).unwrap();

        let store = Store::builder(backend)
            .seed("things", json!([{"id": "9", "label": "repaired"}]))
            .build();

        let records: Vec<Record> = store.load_collection("things").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "9");
    }

    #[test]
    fn malformed_collection_without_seed_is_empty() {
        let backend = Arc::new(MemoryStore::new());
        backend.set("things", &json!({"wrong": "shape"})).unwrap();

        let store = Store::new(backend);
        let records: Vec<Record> = store.load_collection("things").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn singleton_record_round_trip() {
        let store = memory_store();
        let record = Record {
            id: "42".into(),
            label: "current".into(),
        };

        assert!(store.get_record::<Record>("marker").unwrap().is_none());

        store.put_record("marker", &record).unwrap();
        assert_eq!(store.get_record::<Record>("marker").unwrap(), Some(record));

        store.delete_record("marker").unwrap();
        assert!(store.get_record::<Record>("marker").unwrap().is_none());

        // Deleting twice is not an error.
        store.delete_record("marker").unwrap();
    }

    #[test]
    fn malformed_record_reads_as_absent() {
        let backend = Arc::new(MemoryStore::new());
        backend.set("marker", &json!(["not", "a", "record"])).unwrap();

        let store = Store::new(backend);
        assert!(store.get_record::<Record>("marker").unwrap().is_none());
    }

    #[test]
    fn removed_collection_reseeds_on_next_load() {
        let store = Store::builder(Arc::new(MemoryStore::new()))
            .seed("things", json!([{"id": "1", "label": "seeded"}]))
            .build();

        let _: Vec<Record> = store.load_collection("things").unwrap();
        store
            .save_collection(
                "things",
                &[Record {
                    id: "2".into(),
                    label: "replaced".into(),
                }],
            )
            .unwrap();

        store.remove_collection("things").unwrap();

        let records: Vec<Record> = store.load_collection("things").unwrap();
        assert_eq!(records[0].label, "seeded");
    }
}
