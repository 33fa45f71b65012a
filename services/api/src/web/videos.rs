//! services/api/src/web/videos.rs
//!
//! CRUD handlers for the video-project pipeline collection.

use crate::web::state::AppState;
use crate::web::{documents_json, port_err, stamp_updated, to_document};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use creator_hub_core::domain::{VideoProject, VideoProjectPatch};
use creator_hub_core::ports::collections;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_video(
    State(state): State<Arc<AppState>>,
    Json(video): Json<VideoProject>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .insert(collections::VIDEOS, to_document(&video)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let docs = state
        .store
        .list(collections::VIDEOS)
        .await
        .map_err(port_err)?;
    Ok(Json(documents_json(docs)))
}

pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .get(collections::VIDEOS, video_id)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn update_video(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<Uuid>,
    Json(patch): Json<VideoProjectPatch>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut patch = to_document(&patch)?;
    stamp_updated(&mut patch);
    let doc = state
        .store
        .update(collections::VIDEOS, video_id, patch)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .store
        .delete(collections::VIDEOS, video_id)
        .await
        .map_err(port_err)?;
    Ok(Json(json!({"message": "Video deleted successfully"})))
}
