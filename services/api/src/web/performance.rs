//! services/api/src/web/performance.rs
//!
//! CRUD handlers for the content-performance collection, plus the
//! top-content and trends analytics endpoints.

use crate::web::state::AppState;
use crate::web::{documents_json, port_err, sort_by_timestamp_desc, to_document};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use creator_hub_core::analytics;
use creator_hub_core::domain::{ContentPerformance, ContentPerformancePatch};
use creator_hub_core::ports::{collections, parse_documents, parse_documents_with_source};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_performance(
    State(state): State<Arc<AppState>>,
    Json(performance): Json<ContentPerformance>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .insert(collections::PERFORMANCE, to_document(&performance)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

/// Lists performance records, most recently recorded first.
pub async fn list_performances(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut docs = state
        .store
        .list(collections::PERFORMANCE)
        .await
        .map_err(port_err)?;
    sort_by_timestamp_desc(&mut docs, "recorded_date");
    Ok(Json(documents_json(docs)))
}

pub async fn get_performance(
    State(state): State<Arc<AppState>>,
    Path(performance_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .get(collections::PERFORMANCE, performance_id)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn update_performance(
    State(state): State<Arc<AppState>>,
    Path(performance_id): Path<Uuid>,
    Json(patch): Json<ContentPerformancePatch>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .update(collections::PERFORMANCE, performance_id, to_document(&patch)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn delete_performance(
    State(state): State<Arc<AppState>>,
    Path(performance_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .store
        .delete(collections::PERFORMANCE, performance_id)
        .await
        .map_err(port_err)?;
    Ok(Json(json!({"message": "Performance record deleted successfully"})))
}

/// Top content by views and by engagement rate, at most ten each.
pub async fn top_content(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let docs = state
        .store
        .list(collections::PERFORMANCE)
        .await
        .map_err(port_err)?;
    let entries = parse_documents_with_source::<ContentPerformance>(docs);
    Ok(Json(analytics::rank_top_content(&entries)))
}

/// Performance over time, oldest first.
pub async fn trends(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let docs = state
        .store
        .list(collections::PERFORMANCE)
        .await
        .map_err(port_err)?;
    let perfs = parse_documents::<ContentPerformance>(&docs);
    Ok(Json(analytics::performance_trends(&perfs)))
}
