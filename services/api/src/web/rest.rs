//! services/api/src/web/rest.rs
//!
//! The master definition for the OpenAPI specification. The documented paths
//! are the non-CRUD ones; the per-collection CRUD sets follow the same
//! request/response conventions throughout.

use crate::web::recurring::AutoGenerateResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::dashboard::dashboard_stats,
        crate::web::recurring::generate_task,
        crate::web::recurring::auto_generate,
    ),
    components(schemas(AutoGenerateResponse)),
    tags(
        (name = "Creator Hub API", description = "Productivity backend for a content-creator workflow.")
    )
)]
pub struct ApiDoc;
