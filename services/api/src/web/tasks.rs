//! services/api/src/web/tasks.rs
//!
//! CRUD handlers for the tasks collection. Tasks generated from recurring
//! templates land here too, indistinguishable from hand-created ones.

use crate::web::state::AppState;
use crate::web::{documents_json, port_err, to_document};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use creator_hub_core::domain::{Task, TaskPatch};
use creator_hub_core::ports::collections;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(task): Json<Task>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .insert(collections::TASKS, to_document(&task)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let docs = state
        .store
        .list(collections::TASKS)
        .await
        .map_err(port_err)?;
    Ok(Json(documents_json(docs)))
}

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .get(collections::TASKS, task_id)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<Uuid>,
    Json(patch): Json<TaskPatch>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .update(collections::TASKS, task_id, to_document(&patch)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .store
        .delete(collections::TASKS, task_id)
        .await
        .map_err(port_err)?;
    Ok(Json(json!({"message": "Task deleted successfully"})))
}
