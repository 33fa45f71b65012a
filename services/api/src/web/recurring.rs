//! services/api/src/web/recurring.rs
//!
//! CRUD handlers for recurring-task templates, and the two generation
//! endpoints that materialize concrete tasks from them.

use crate::web::state::AppState;
use crate::web::{documents_json, port_err, to_document};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use creator_hub_core::domain::{RecurringTask, RecurringTaskPatch};
use creator_hub_core::ports::collections;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

/// The response payload of the batch generation endpoint.
#[derive(Serialize, ToSchema)]
pub struct AutoGenerateResponse {
    pub message: String,
    pub count: usize,
}

pub async fn create_recurring_task(
    State(state): State<Arc<AppState>>,
    Json(template): Json<RecurringTask>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .insert(collections::RECURRING_TASKS, to_document(&template)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn list_recurring_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let docs = state
        .store
        .list(collections::RECURRING_TASKS)
        .await
        .map_err(port_err)?;
    Ok(Json(documents_json(docs)))
}

pub async fn get_recurring_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .get(collections::RECURRING_TASKS, task_id)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn update_recurring_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<Uuid>,
    Json(patch): Json<RecurringTaskPatch>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .update(collections::RECURRING_TASKS, task_id, to_document(&patch)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn delete_recurring_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .store
        .delete(collections::RECURRING_TASKS, task_id)
        .await
        .map_err(port_err)?;
    Ok(Json(json!({"message": "Recurring task deleted successfully"})))
}

/// Generate one task from a recurring template.
///
/// The created task inherits the template's scheduled date; the template's
/// schedule then advances by its cadence.
#[utoipa::path(
    post,
    path = "/api/recurring-tasks/{task_id}/generate",
    responses(
        (status = 200, description = "Task generated from the template"),
        (status = 404, description = "Template not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("task_id" = Uuid, Path, description = "The recurring template's id.")
    )
)]
pub async fn generate_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let created = state
        .scheduler
        .generate_one(task_id, Utc::now())
        .await
        .map_err(port_err)?;
    Ok(Json(created.into_json()))
}

/// Generate tasks from every active template that is due.
#[utoipa::path(
    post,
    path = "/api/recurring-tasks/auto-generate",
    responses(
        (status = 200, description = "Batch generation finished", body = AutoGenerateResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn auto_generate(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let count = state
        .scheduler
        .auto_generate_due(Utc::now())
        .await
        .map_err(port_err)?;
    Ok(Json(AutoGenerateResponse {
        message: format!("Generated {} tasks from recurring templates", count),
        count,
    }))
}
