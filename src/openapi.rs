use utoipa::OpenApi;
use crate::error::ErrorResponse;
use crate::handlers::{health, storages};
use crate::models::storage::{ImportResponse, ImportResult, Storage, UpdateStorageRequest};

/// Generate the OpenAPI documentation for the entire API
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        health::check,

        // Storage endpoints
        storages::create_storage,
        storages::get_storages,
        storages::update_storage,
        storages::delete_storage,
        storages::import_storages,
    ),
    components(
        schemas(
            health::HealthResponse,
            Storage,
            UpdateStorageRequest,
            ImportResult,
            ImportResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "storages", description = "Storage management endpoints"),
    )
)]
pub struct ApiDoc;
