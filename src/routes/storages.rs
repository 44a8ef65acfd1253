use axum::{
    middleware,
    routing::{post, put},
    Router,
};

use crate::auth::require_admin_role;
use crate::handlers::storages;
use crate::AppState;

pub fn storage_router() -> Router<AppState> {
    let admin = Router::new()
        .route(
            "/storages",
            post(storages::create_storage).get(storages::get_storages),
        )
        .route(
            "/storages/:name",
            put(storages::update_storage).delete(storages::delete_storage),
        )
        .route_layer(middleware::from_fn(require_admin_role));

    Router::new()
        .merge(admin)
        .route("/import/storages", post(storages::import_storages))
}
