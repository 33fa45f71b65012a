//! services/api/src/web/dashboard.rs
//!
//! The read-only dashboard endpoint.

use crate::web::port_err;
use crate::web::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use std::sync::Arc;

/// Current dashboard snapshot across all collections.
///
/// Recomputed from the source collections on every call; nothing is cached.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Current dashboard snapshot"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn dashboard_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let stats = state
        .dashboard
        .compute_stats(Utc::now())
        .await
        .map_err(port_err)?;
    Ok(Json(stats))
}
