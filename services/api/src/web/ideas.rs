//! services/api/src/web/ideas.rs
//!
//! CRUD handlers for the idea bank, plus full-text-ish search.

use crate::web::state::AppState;
use crate::web::{documents_json, port_err, sort_by_timestamp_desc, stamp_updated, to_document};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use creator_hub_core::analytics::idea_matches;
use creator_hub_core::domain::{Idea, IdeaPatch};
use creator_hub_core::ports::{collections, parse_documents_with_source};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_idea(
    State(state): State<Arc<AppState>>,
    Json(idea): Json<Idea>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .insert(collections::IDEAS, to_document(&idea)?)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

/// Lists ideas, newest first.
pub async fn list_ideas(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut docs = state
        .store
        .list(collections::IDEAS)
        .await
        .map_err(port_err)?;
    sort_by_timestamp_desc(&mut docs, "created_date");
    Ok(Json(documents_json(docs)))
}

pub async fn get_idea(
    State(state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let doc = state
        .store
        .get(collections::IDEAS, idea_id)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn update_idea(
    State(state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
    Json(patch): Json<IdeaPatch>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut patch = to_document(&patch)?;
    stamp_updated(&mut patch);
    let doc = state
        .store
        .update(collections::IDEAS, idea_id, patch)
        .await
        .map_err(port_err)?;
    Ok(Json(doc.into_json()))
}

pub async fn delete_idea(
    State(state): State<Arc<AppState>>,
    Path(idea_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .store
        .delete(collections::IDEAS, idea_id)
        .await
        .map_err(port_err)?;
    Ok(Json(json!({"message": "Idea deleted successfully"})))
}

/// Case-insensitive substring search over title, content, category and tags.
pub async fn search_ideas(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let docs = state
        .store
        .list(collections::IDEAS)
        .await
        .map_err(port_err)?;
    let matches: Vec<_> = parse_documents_with_source::<Idea>(docs)
        .into_iter()
        .filter(|(_, idea)| idea_matches(idea, &query))
        .map(|(doc, _)| doc)
        .collect();
    Ok(Json(documents_json(matches)))
}
