//! services/api/src/bin/api.rs

use api_lib::{
    adapters::PgDocumentStore,
    config::Config,
    error::ApiError,
    web::{
        calendar, dashboard, ideas, performance, recurring, rest::ApiDoc, revenue,
        state::AppState, study_notes, tasks, videos,
    },
};
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Connect to Database & Run Migrations ---
    info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    let store = Arc::new(PgDocumentStore::new(db_pool));
    info!("Running database migrations...");
    store.run_migrations().await?;
    info!("Database migrations complete.");

    // --- 3. Build the Shared AppState ---
    let app_state = Arc::new(AppState::new(store, config.clone()));

    // --- 4. Create the Web Router ---
    let api_routes = Router::new()
        .route(
            "/videos",
            post(videos::create_video).get(videos::list_videos),
        )
        .route(
            "/videos/{video_id}",
            get(videos::get_video)
                .put(videos::update_video)
                .delete(videos::delete_video),
        )
        .route(
            "/study-notes",
            post(study_notes::create_study_note).get(study_notes::list_study_notes),
        )
        .route(
            "/study-notes/{note_id}",
            get(study_notes::get_study_note)
                .put(study_notes::update_study_note)
                .delete(study_notes::delete_study_note),
        )
        .route(
            "/calendar",
            post(calendar::create_calendar_item).get(calendar::list_calendar_items),
        )
        .route(
            "/calendar/{item_id}",
            get(calendar::get_calendar_item)
                .put(calendar::update_calendar_item)
                .delete(calendar::delete_calendar_item),
        )
        .route("/tasks", post(tasks::create_task).get(tasks::list_tasks))
        .route(
            "/tasks/{task_id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/dashboard/stats", get(dashboard::dashboard_stats))
        .route(
            "/revenue",
            post(revenue::create_revenue).get(revenue::list_revenues),
        )
        .route(
            "/revenue/{revenue_id}",
            get(revenue::get_revenue)
                .put(revenue::update_revenue)
                .delete(revenue::delete_revenue),
        )
        .route("/revenue/summary/monthly", get(revenue::monthly_summary))
        .route("/revenue/summary/category", get(revenue::category_summary))
        .route(
            "/performance",
            post(performance::create_performance).get(performance::list_performances),
        )
        .route(
            "/performance/{performance_id}",
            get(performance::get_performance)
                .put(performance::update_performance)
                .delete(performance::delete_performance),
        )
        .route(
            "/performance/analytics/top-content",
            get(performance::top_content),
        )
        .route("/performance/analytics/trends", get(performance::trends))
        .route("/ideas", post(ideas::create_idea).get(ideas::list_ideas))
        .route(
            "/ideas/{idea_id}",
            get(ideas::get_idea)
                .put(ideas::update_idea)
                .delete(ideas::delete_idea),
        )
        .route("/ideas/search/{query}", get(ideas::search_ideas))
        .route(
            "/recurring-tasks",
            post(recurring::create_recurring_task).get(recurring::list_recurring_tasks),
        )
        .route(
            "/recurring-tasks/{task_id}",
            get(recurring::get_recurring_task)
                .put(recurring::update_recurring_task)
                .delete(recurring::delete_recurring_task),
        )
        .route(
            "/recurring-tasks/{task_id}/generate",
            post(recurring::generate_task),
        )
        .route(
            "/recurring-tasks/auto-generate",
            post(recurring::auto_generate),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete
    // application.
    let app = Router::new()
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
