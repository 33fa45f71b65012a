//! services/api/src/web/calendar.rs
//!
//! CRUD handlers for the content-calendar collection.

use crate::web::state::AppState;
use crate::web::{documents_json, port_err, to_document};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use creator_hub_core::domain::{CalendarItem, CalendarItemPatch};
use creator_hub_core::ports::collections;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_calendar_item(
    State(state): State<Arc<AppState>>,
    Json(item): Json<CalendarItem>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .insert(collections::CALENDAR, to_document(&item)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn list_calendar_items(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let docs = state
        .store
        .list(collections::CALENDAR)
        .await
        .map_err(port_err)?;
    Ok(Json(documents_json(docs)))
}

pub async fn get_calendar_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .get(collections::CALENDAR, item_id)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn update_calendar_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<Uuid>,
    Json(patch): Json<CalendarItemPatch>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .update(collections::CALENDAR, item_id, to_document(&patch)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn delete_calendar_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .store
        .delete(collections::CALENDAR, item_id)
        .await
        .map_err(port_err)?;
    Ok(Json(json!({"message": "Calendar item deleted successfully"})))
}
