//! services/api/src/adapters/store.rs
//!
//! The database adapter: the concrete implementation of the `DocumentStore`
//! port from the `core` crate. All collections live in a single Postgres
//! table of JSONB documents, accessed through `sqlx`.

use async_trait::async_trait;
use creator_hub_core::ports::{DocumentStore, PortError, PortResult, StoredDocument};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Per-collection fetch cap: list operations never return more rows than
/// this, so aggregation always works over a bounded set.
const FETCH_LIMIT: i64 = 1000;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A document-store adapter backed by a Postgres JSONB table.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Creates a new `PgDocumentStore`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct DocumentRecord {
    id: Uuid,
    data: Value,
}

impl DocumentRecord {
    fn into_document(self) -> StoredDocument {
        StoredDocument {
            id: self.id,
            data: self.data,
        }
    }
}

fn unexpected(e: sqlx::Error) -> PortError {
    PortError::Unexpected(e.to_string())
}

//=========================================================================================
// `DocumentStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, data: Value) -> PortResult<StoredDocument> {
        let record = sqlx::query_as::<_, DocumentRecord>(
            "INSERT INTO documents (id, collection, data) VALUES ($1, $2, $3) \
             RETURNING id, data",
        )
        .bind(Uuid::new_v4())
        .bind(collection)
        .bind(data)
        .fetch_one(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(record.into_document())
    }

    async fn list(&self, collection: &str) -> PortResult<Vec<StoredDocument>> {
        let records = sqlx::query_as::<_, DocumentRecord>(
            "SELECT id, data FROM documents WHERE collection = $1 \
             ORDER BY created_at ASC LIMIT $2",
        )
        .bind(collection)
        .bind(FETCH_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(records.into_iter().map(|r| r.into_document()).collect())
    }

    async fn get(&self, collection: &str, id: Uuid) -> PortResult<StoredDocument> {
        let record = sqlx::query_as::<_, DocumentRecord>(
            "SELECT id, data FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?
        .ok_or_else(|| PortError::NotFound(format!("Document {} not found", id)))?;
        Ok(record.into_document())
    }

    async fn update(
        &self,
        collection: &str,
        id: Uuid,
        patch: Value,
    ) -> PortResult<StoredDocument> {
        // JSONB `||` merges at the top level: present fields overwrite,
        // absent fields stay as stored.
        let record = sqlx::query_as::<_, DocumentRecord>(
            "UPDATE documents SET data = data || $3 \
             WHERE collection = $1 AND id = $2 RETURNING id, data",
        )
        .bind(collection)
        .bind(id)
        .bind(patch)
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?
        .ok_or_else(|| PortError::NotFound(format!("Document {} not found", id)))?;
        Ok(record.into_document())
    }

    async fn delete(&self, collection: &str, id: Uuid) -> PortResult<()> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;
        if result.rows_affected() == 0 {
            return Err(PortError::NotFound(format!("Document {} not found", id)));
        }
        Ok(())
    }

    async fn count(&self, collection: &str) -> PortResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
                .bind(collection)
                .fetch_one(&self.pool)
                .await
                .map_err(unexpected)?;
        Ok(count as u64)
    }
}
