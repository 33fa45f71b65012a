//! services/api/src/web/study_notes.rs
//!
//! CRUD handlers for the study-notes collection.

use crate::web::state::AppState;
use crate::web::{documents_json, port_err, stamp_updated, to_document};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use creator_hub_core::domain::{StudyNote, StudyNotePatch};
use creator_hub_core::ports::collections;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_study_note(
    State(state): State<Arc<AppState>>,
    Json(note): Json<StudyNote>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .insert(collections::STUDY_NOTES, to_document(&note)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn list_study_notes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let docs = state
        .store
        .list(collections::STUDY_NOTES)
        .await
        .map_err(port_err)?;
    Ok(Json(documents_json(docs)))
}

pub async fn get_study_note(
    State(state): State<Arc<AppState>>,
    Path(note_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .get(collections::STUDY_NOTES, note_id)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn update_study_note(
    State(state): State<Arc<AppState>>,
    Path(note_id): Path<Uuid>,
    Json(patch): Json<StudyNotePatch>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut patch = to_document(&patch)?;
    stamp_updated(&mut patch);
    let doc = state
        .store
        .update(collections::STUDY_NOTES, note_id, patch)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn delete_study_note(
    State(state): State<Arc<AppState>>,
    Path(note_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .store
        .delete(collections::STUDY_NOTES, note_id)
        .await
        .map_err(port_err)?;
    Ok(Json(json!({"message": "Study note deleted successfully"})))
}
