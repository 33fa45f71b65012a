//! crates/creator_hub_core/src/ports.rs
//!
//! Defines the service contract (trait) between the core logic and the
//! document store. The trait forms the boundary of the hexagonal
//! architecture, keeping the core independent of the concrete database.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors of the underlying store.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Stored document is malformed: {0}")]
    Malformed(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Collections
//=========================================================================================

/// Names of the independent collections held by the store.
pub mod collections {
    pub const VIDEOS: &str = "videos";
    pub const STUDY_NOTES: &str = "study_notes";
    pub const CALENDAR: &str = "calendar";
    pub const TASKS: &str = "tasks";
    pub const REVENUE: &str = "revenue";
    pub const PERFORMANCE: &str = "performance";
    pub const IDEAS: &str = "ideas";
    pub const RECURRING_TASKS: &str = "recurring_tasks";
}

//=========================================================================================
// Stored Documents
//=========================================================================================

/// A raw document as held by the store: the store-assigned id plus the
/// schemaless JSON body.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub id: Uuid,
    pub data: Value,
}

impl StoredDocument {
    /// Deserializes the document body into a typed model.
    pub fn parse<T: DeserializeOwned>(&self) -> PortResult<T> {
        serde_json::from_value(self.data.clone())
            .map_err(|e| PortError::Malformed(format!("document {}: {}", self.id, e)))
    }

    /// Consumes the document and returns its body with the store id injected
    /// as an `"id"` field, the shape every API response uses.
    pub fn into_json(mut self) -> Value {
        if let Value::Object(ref mut fields) = self.data {
            fields.insert("id".to_string(), Value::String(self.id.to_string()));
        }
        self.data
    }
}

/// Parses every document into `T`, skipping (and logging) any that no longer
/// match the expected shape. Aggregation over a schemaless store must tolerate
/// stray documents rather than fail the whole request.
pub fn parse_documents<T: DeserializeOwned>(docs: &[StoredDocument]) -> Vec<T> {
    docs.iter()
        .filter_map(|doc| match doc.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(error = %e, "skipping malformed document");
                None
            }
        })
        .collect()
}

/// Like [`parse_documents`], but keeps the source document alongside each
/// parsed value for callers that need the id or the raw body.
pub fn parse_documents_with_source<T: DeserializeOwned>(
    docs: Vec<StoredDocument>,
) -> Vec<(StoredDocument, T)> {
    docs.into_iter()
        .filter_map(|doc| match doc.parse::<T>() {
            Ok(parsed) => Some((doc, parsed)),
            Err(e) => {
                warn!(error = %e, "skipping malformed document");
                None
            }
        })
        .collect()
}

//=========================================================================================
// Service Port (Trait)
//=========================================================================================

/// The schemaless, collection-oriented document store.
///
/// `update` merges the given patch into the stored body at the top level:
/// present fields overwrite, absent fields are left untouched. `list` returns
/// the full collection, bounded by the adapter's fetch cap.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, collection: &str, data: Value) -> PortResult<StoredDocument>;

    async fn list(&self, collection: &str) -> PortResult<Vec<StoredDocument>>;

    async fn get(&self, collection: &str, id: Uuid) -> PortResult<StoredDocument>;

    async fn update(&self, collection: &str, id: Uuid, patch: Value)
        -> PortResult<StoredDocument>;

    async fn delete(&self, collection: &str, id: Uuid) -> PortResult<()>;

    async fn count(&self, collection: &str) -> PortResult<u64>;
}
