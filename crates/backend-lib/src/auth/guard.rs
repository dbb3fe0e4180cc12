// ============================
// reshelf-backend-lib/src/auth/guard.rs
// ============================
//! Per-request authorization guard.
//!
//! The decision itself is a pure function over (route class, header); the
//! axum middlewares below are thin wrappers that run it against the real
//! `Authorization` header and stash the verified claims in the request
//! extensions for the handlers.
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use reshelf_common::Role;

use crate::auth::token::{Claims, TokenService};
use crate::error::AppError;
use crate::AppState;

/// Authorization class of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// No token required
    Public,
    /// Any valid token
    Authenticated,
    /// Valid token carrying the `Admin` role
    AdminOnly,
}

/// Classify one request.
///
/// Returns the verified claims for non-public classes, `None` for public
/// routes. Failures map onto the stable error taxonomy: absent header →
/// `AuthenticationRequired`, non-bearer scheme → `InvalidTokenFormat`,
/// failed verification → `InvalidToken`, valid token without the admin role
/// on an admin-only class → `Forbidden`.
pub fn authorize(
    tokens: &TokenService,
    class: RouteClass,
    header: Option<&str>,
) -> Result<Option<Claims>, AppError> {
    if class == RouteClass::Public {
        return Ok(None);
    }

    let header = header.ok_or(AppError::AuthenticationRequired)?;
    let token = header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or(AppError::InvalidTokenFormat)?;

    let claims = tokens.verify(token)?;

    if class == RouteClass::AdminOnly && claims.role != Role::Admin {
        return Err(AppError::Forbidden);
    }

    Ok(Some(claims))
}

fn bearer_header(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

async fn run_guard(
    state: &AppState,
    class: RouteClass,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authorize(&state.tokens, class, bearer_header(&request))?
        .ok_or(AppError::AuthenticationRequired)?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Middleware for `Authenticated` routes.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    run_guard(&state, RouteClass::Authenticated, request, next).await
}

/// Middleware for `AdminOnly` routes.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    run_guard(&state, RouteClass::AdminOnly, request, next).await
}
