//! services/api/src/web/revenue.rs
//!
//! CRUD handlers for the revenue collection, plus the monthly and
//! per-category summary endpoints.

use crate::web::state::AppState;
use crate::web::{documents_json, port_err, sort_by_timestamp_desc, to_document};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use creator_hub_core::analytics;
use creator_hub_core::domain::{Revenue, RevenuePatch};
use creator_hub_core::ports::{collections, parse_documents};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_revenue(
    State(state): State<Arc<AppState>>,
    Json(revenue): Json<Revenue>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .insert(collections::REVENUE, to_document(&revenue)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

/// Lists revenue records, most recent payment date first.
pub async fn list_revenues(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut docs = state
        .store
        .list(collections::REVENUE)
        .await
        .map_err(port_err)?;
    sort_by_timestamp_desc(&mut docs, "payment_date");
    Ok(Json(documents_json(docs)))
}

pub async fn get_revenue(
    State(state): State<Arc<AppState>>,
    Path(revenue_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .get(collections::REVENUE, revenue_id)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn update_revenue(
    State(state): State<Arc<AppState>>,
    Path(revenue_id): Path<Uuid>,
    Json(patch): Json<RevenuePatch>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .update(collections::REVENUE, revenue_id, to_document(&patch)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn delete_revenue(
    State(state): State<Arc<AppState>>,
    Path(revenue_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .store
        .delete(collections::REVENUE, revenue_id)
        .await
        .map_err(port_err)?;
    Ok(Json(json!({"message": "Revenue record deleted successfully"})))
}

/// Revenue grouped by month, newest first.
pub async fn monthly_summary(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let docs = state
        .store
        .list(collections::REVENUE)
        .await
        .map_err(port_err)?;
    let revenues = parse_documents::<Revenue>(&docs);
    Ok(Json(analytics::monthly_revenue_summary(&revenues)))
}

/// Received revenue grouped by source category.
pub async fn category_summary(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let docs = state
        .store
        .list(collections::REVENUE)
        .await
        .map_err(port_err)?;
    let revenues = parse_documents::<Revenue>(&docs);
    Ok(Json(analytics::revenue_by_category(&revenues)))
}
