// ============================
// reshelf-backend-lib/src/handlers/accounts.rs
// ============================
//! Handlers for the auth and account-administration endpoints.
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use reshelf_common::{
    AuthResponse, CreateUserRequest, LoginRequest, MessageResponse, RegisterRequest,
    UpdateUserRequest, UserPublic, UserResponse, UsersResponse,
};

use crate::auth::Claims;
use crate::error::AppError;
use crate::AppState;

/// `POST /auth/register`
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let account = state.accounts.register(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: UserPublic::from(&account),
        }),
    ))
}

/// `POST /auth/login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let (account, token) = state.accounts.login(req).await?;
    Ok(Json(AuthResponse {
        user: UserPublic::from(&account),
        token,
    }))
}

/// `GET /auth/me`
pub async fn me(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserResponse>, AppError> {
    let account = state.accounts.get(&claims.sub).await?;
    Ok(Json(UserResponse {
        user: UserPublic::from(&account),
    }))
}

/// `GET /admin/users`
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UsersResponse>, AppError> {
    let accounts = state.accounts.list_all(claims.role).await?;
    Ok(Json(UsersResponse {
        users: accounts.iter().map(UserPublic::from).collect(),
    }))
}

/// `POST /admin/users`
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let account = state.accounts.admin_create(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: UserPublic::from(&account),
        }),
    ))
}

/// `GET /admin/users/{id}`
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    if !claims.role.is_admin() {
        return Err(AppError::Forbidden);
    }
    let account = state.accounts.get(&id).await?;
    Ok(Json(UserResponse {
        user: UserPublic::from(&account),
    }))
}

/// `PUT /admin/users/{id}` — admin, or the account itself (name/email only)
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let account = state
        .accounts
        .update(&claims.sub, claims.role, &id, req)
        .await?;
    Ok(Json(UserResponse {
        user: UserPublic::from(&account),
    }))
}

/// `DELETE /admin/users/{id}`
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.accounts.delete(&claims.sub, claims.role, &id).await?;
    Ok(Json(MessageResponse {
        message: "user deleted successfully".to_string(),
    }))
}
