//! HTTP request handlers
//!
//! Thin glue: parse, call the repository on the blocking pool, wrap the result.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::Result;
use crate::model::{Server, ServerInput};
use crate::repository::InventoryRepository;
use crate::transform;

use super::response::{ApiError, ApiResult, Data};

/// Content type of the YAML inventory export
pub const YAML_CONTENT_TYPE: &str = "application/x-yaml; charset=utf-8";

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub repo: InventoryRepository,
}

/// Query string for `GET /inventory`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub format: Option<String>,
}

/// Run a repository call on the blocking pool
async fn blocking<T, F>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(format!("repository task failed: {}", e)))?
        .map_err(ApiError::from)
}

fn parse_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// GET /inventory
pub async fn list_inventory(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Response> {
    let repo = state.repo.clone();
    let servers = blocking(move || repo.list_all()).await?;

    if servers.is_empty() {
        return Err(ApiError::EmptyInventory);
    }

    if query.format.as_deref() == Some("yaml") {
        let body = transform::to_ansible_yaml(&servers)?;
        return Ok(([(header::CONTENT_TYPE, YAML_CONTENT_TYPE)], body).into_response());
    }

    Ok(Json(Data::new(servers)).into_response())
}

/// GET /inventory/{id}
pub async fn get_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Data<Server>>> {
    let repo = state.repo.clone();
    let server = blocking(move || repo.get(&id)).await?;

    server
        .map(|s| Json(Data::new(s)))
        .ok_or(ApiError::NotFound)
}

/// POST /inventory
pub async fn create_server(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ServerInput>, JsonRejection>,
) -> ApiResult<Json<Data<Server>>> {
    let input = parse_body(payload)?;

    let repo = state.repo.clone();
    let server = blocking(move || repo.create(input)).await?;

    tracing::info!("Created server {} ({})", server.id, server.fqdn);
    Ok(Json(Data::new(server)))
}

/// PUT /inventory/{id}
pub async fn update_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<ServerInput>, JsonRejection>,
) -> ApiResult<Json<Data<Server>>> {
    let patch = parse_body(payload)?;

    let repo = state.repo.clone();
    let merged = blocking(move || repo.patch(&id, &patch)).await?;

    merged
        .map(|s| Json(Data::new(s)))
        .ok_or(ApiError::NotFound)
}

/// DELETE /inventory/{id}
pub async fn delete_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let repo = state.repo.clone();
    blocking(move || repo.delete(&id)).await?;

    Ok(StatusCode::ACCEPTED)
}
