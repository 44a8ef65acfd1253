use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{ApiResult, ErrorResponse},
    extract::{JsonBody, ValidatedJson},
    models::storage::{ImportResponse, Storage, UpdateStorageRequest},
    AppState,
};

/// Create storage
#[utoipa::path(
    post,
    path = "/storages",
    tag = "storages",
    request_body = Storage,
    params(
        ("X-User-Role" = String, Header, description = "Caller role, must be admin")
    ),
    responses(
        (status = 201, description = "Storage created"),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 409, description = "Storage already exists", body = ErrorResponse)
    )
)]
pub async fn create_storage(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<Storage>,
) -> ApiResult<StatusCode> {
    state.storage_actions.create_storage(req).await?;
    Ok(StatusCode::CREATED)
}

/// Import storages by name.
///
/// Every name is created with the default size. Items are processed in
/// order and a failing item never fails the request: it is reported in
/// the `failed` list instead.
#[utoipa::path(
    post,
    path = "/import/storages",
    tag = "storages",
    request_body = Vec<String>,
    responses(
        (status = 202, description = "Storages imported", body = ImportResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn import_storages(
    State(state): State<AppState>,
    JsonBody(names): JsonBody<Vec<String>>,
) -> (StatusCode, Json<ImportResponse>) {
    let mut resp = ImportResponse::default();

    for name in names {
        match state
            .storage_actions
            .create_storage(Storage::imported(name.clone()))
            .await
        {
            Ok(()) => resp.import_successful(name, ""),
            Err(e) => {
                tracing::warn!("Failed to import storage {}: {}", name, e);
                resp.import_failed(name, "", e.to_string());
            }
        }
    }

    tracing::info!(
        "Storage import finished: {} imported, {} failed",
        resp.imported.len(),
        resp.failed.len()
    );

    (StatusCode::ACCEPTED, Json(resp))
}

/// Get storage list
#[utoipa::path(
    get,
    path = "/storages",
    tag = "storages",
    params(
        ("X-User-Role" = String, Header, description = "Caller role, must be admin")
    ),
    responses(
        (status = 200, description = "Storages list", body = Vec<Storage>),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    )
)]
pub async fn get_storages(State(state): State<AppState>) -> ApiResult<Json<Vec<Storage>>> {
    let storages = state.storage_actions.get_storages().await?;
    Ok(Json(storages))
}

/// Update storage
#[utoipa::path(
    put,
    path = "/storages/{name}",
    tag = "storages",
    request_body = UpdateStorageRequest,
    params(
        ("name" = String, Path, description = "Storage name"),
        ("X-User-Role" = String, Header, description = "Caller role, must be admin")
    ),
    responses(
        (status = 202, description = "Storage updated"),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Storage not found", body = ErrorResponse)
    )
)]
pub async fn update_storage(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateStorageRequest>,
) -> ApiResult<StatusCode> {
    state.storage_actions.update_storage(&name, req).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Delete storage
#[utoipa::path(
    delete,
    path = "/storages/{name}",
    tag = "storages",
    params(
        ("name" = String, Path, description = "Storage name"),
        ("X-User-Role" = String, Header, description = "Caller role, must be admin")
    ),
    responses(
        (status = 202, description = "Storage deleted"),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Storage not found", body = ErrorResponse)
    )
)]
pub async fn delete_storage(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    state.storage_actions.delete_storage(&name).await?;
    Ok(StatusCode::ACCEPTED)
}
