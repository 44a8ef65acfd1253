use std::sync::Arc;
use anyhow::Context;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod actions;
pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod telemetry;

use actions::StorageActions;

#[derive(Clone)]
pub struct AppState {
    pub config: config::Settings,
    pub storage_actions: Arc<dyn StorageActions>,
}

impl AppState {
    pub fn new(config: config::Settings, storage_actions: Arc<dyn StorageActions>) -> Self {
        Self { config, storage_actions }
    }
}

/// Create the main Axum application router
pub fn create_app(state: AppState) -> Router {
    // Register API documentation
    let openapi = openapi::ApiDoc::openapi();

    Router::new()
        .merge(routes::storages::storage_router())
        // Health and monitoring endpoints
        .merge(routes::health::health_router())
        // Serve Swagger UI
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured address and serve until the process is stopped
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    state.config.validate_all().context("Invalid configuration")?;
    let addr = state
        .config
        .server
        .socket_addr()
        .context("Invalid bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Volume manager listening on {}", addr);

    axum::serve(listener, create_app(state))
        .await
        .context("Server error")?;

    Ok(())
}
