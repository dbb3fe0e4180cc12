// ============================
// reshelf-backend-lib/src/handlers/resources.rs
// ============================
//! Handlers for the resource endpoints.
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use reshelf_common::{
    CreateResourceRequest, MessageResponse, ResourcePublic, ResourceResponse, ResourcesResponse,
    UpdateResourceRequest,
};

use crate::auth::Claims;
use crate::error::AppError;
use crate::AppState;

/// `GET /resources`
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResourcesResponse>, AppError> {
    let resources = state.resources.list().await?;
    Ok(Json(ResourcesResponse { resources }))
}

/// `POST /resources`
pub async fn create(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateResourceRequest>,
) -> Result<(StatusCode, Json<ResourceResponse>), AppError> {
    let resource = state.resources.create(&claims.sub, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ResourceResponse {
            resource: ResourcePublic::from(&resource),
        }),
    ))
}

/// `GET /resources/{id}`
pub async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ResourceResponse>, AppError> {
    let resource = state.resources.get(&id).await?;
    Ok(Json(ResourceResponse {
        resource: ResourcePublic::from(&resource),
    }))
}

/// `PUT /resources/{id}` — owner or admin
pub async fn update(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(req): Json<UpdateResourceRequest>,
) -> Result<Json<ResourceResponse>, AppError> {
    let resource = state
        .resources
        .update(&claims.sub, claims.role, &id, req)
        .await?;
    Ok(Json(ResourceResponse {
        resource: ResourcePublic::from(&resource),
    }))
}

/// `DELETE /resources/{id}` — owner or admin
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.resources.delete(&claims.sub, claims.role, &id).await?;
    Ok(Json(MessageResponse {
        message: "resource deleted successfully".to_string(),
    }))
}
