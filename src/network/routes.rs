//! Route table

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::repository::InventoryRepository;

use super::handlers::{
    create_server, delete_server, get_server, list_inventory, update_server, AppState,
};

/// Build the inventory router
pub fn create_router(repo: InventoryRepository, body_limit_bytes: usize) -> Router {
    Router::new()
        .route("/inventory", get(list_inventory).post(create_server))
        .route(
            "/inventory/:id",
            get(get_server).put(update_server).delete(delete_server),
        )
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { repo })
}
