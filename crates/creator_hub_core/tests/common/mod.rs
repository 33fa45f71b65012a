//! In-memory `DocumentStore` double shared by the integration tests.

use async_trait::async_trait;
use creator_hub_core::ports::{DocumentStore, PortError, PortResult, StoredDocument};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document straight into a collection, returning its id.
    pub fn seed(&self, collection: &str, data: Value) -> Uuid {
        let doc = StoredDocument {
            id: Uuid::new_v4(),
            data,
        };
        let id = doc.id;
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        id
    }

    /// Reads a document back out, bypassing the port.
    pub fn snapshot(&self, collection: &str, id: Uuid) -> Option<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .map(|d| d.data.clone())
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }
}

fn merge_top_level(base: &mut Value, patch: Value) {
    if let (Value::Object(base_fields), Value::Object(patch_fields)) = (base, patch) {
        for (key, value) in patch_fields {
            base_fields.insert(key, value);
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, data: Value) -> PortResult<StoredDocument> {
        let doc = StoredDocument {
            id: Uuid::new_v4(),
            data,
        };
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());
        Ok(doc)
    }

    async fn list(&self, collection: &str) -> PortResult<Vec<StoredDocument>> {
        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: Uuid) -> PortResult<StoredDocument> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Document {id} not found")))
    }

    async fn update(
        &self,
        collection: &str,
        id: Uuid,
        patch: Value,
    ) -> PortResult<StoredDocument> {
        let mut collections = self.collections.lock().unwrap();
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
            .ok_or_else(|| PortError::NotFound(format!("Document {id} not found")))?;
        merge_top_level(&mut doc.data, patch);
        Ok(doc.clone())
    }

    async fn delete(&self, collection: &str, id: Uuid) -> PortResult<()> {
        let mut collections = self.collections.lock().unwrap();
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| PortError::NotFound(format!("Document {id} not found")))?;
        let before = docs.len();
        docs.retain(|d| d.id != id);
        if docs.len() == before {
            return Err(PortError::NotFound(format!("Document {id} not found")));
        }
        Ok(())
    }

    async fn count(&self, collection: &str) -> PortResult<u64> {
        Ok(self.len(collection) as u64)
    }
}
