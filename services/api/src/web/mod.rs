//! services/api/src/web/mod.rs
//!
//! Axum handler modules, one per resource, plus the small helpers they all
//! share.

pub mod calendar;
pub mod dashboard;
pub mod ideas;
pub mod performance;
pub mod recurring;
pub mod rest;
pub mod revenue;
pub mod state;
pub mod study_notes;
pub mod tasks;
pub mod videos;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use creator_hub_core::ports::{PortError, StoredDocument};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

/// Maps a port error to the HTTP response pair every handler returns.
/// Details of unexpected failures go to the log, not the client.
pub(crate) fn port_err(e: PortError) -> (StatusCode, String) {
    match e {
        PortError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        other => {
            error!(error = %other, "storage operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal storage error".to_string(),
            )
        }
    }
}

/// Serializes a model or patch into the JSON body the store expects.
pub(crate) fn to_document<T: Serialize>(value: &T) -> Result<Value, (StatusCode, String)> {
    serde_json::to_value(value).map_err(|e| {
        error!(error = %e, "failed to encode document");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to encode document".to_string(),
        )
    })
}

/// Renders a list of stored documents as response JSON.
pub(crate) fn documents_json(docs: Vec<StoredDocument>) -> Vec<Value> {
    docs.into_iter().map(StoredDocument::into_json).collect()
}

fn doc_timestamp(doc: &StoredDocument, field: &str) -> Option<DateTime<Utc>> {
    doc.data.get(field)?.as_str()?.parse().ok()
}

/// Sorts documents newest-first on a top-level timestamp field; documents
/// missing the field (or holding something unparseable) sort last.
pub(crate) fn sort_by_timestamp_desc(docs: &mut [StoredDocument], field: &str) {
    docs.sort_by_key(|doc| std::cmp::Reverse(doc_timestamp(doc, field)));
}

/// Stamps `updated_date` onto a non-empty patch, so any edit refreshes the
/// document's modification time.
pub(crate) fn stamp_updated(patch: &mut Value) {
    if let Value::Object(fields) = patch {
        if !fields.is_empty() {
            fields.insert(
                "updated_date".to_string(),
                Value::String(Utc::now().to_rfc3339()),
            );
        }
    }
}
