// ============================
// reshelf-backend-lib/src/router.rs
// ============================
//! HTTP router: route table, authorization classes and shared layers.
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::{require_admin, require_auth};
use crate::handlers::{accounts, resources};
use crate::AppState;

/// Create the application router.
///
/// Routes are grouped by authorization class: public routes carry no guard,
/// everything else goes through `require_auth`, and the account-collection
/// admin routes additionally demand the admin role at the guard. The
/// `/admin/users/{id}` routes sit in the authenticated group because account
/// updates are legal for the account itself; the services enforce the finer
/// admin/self/ownership rules.
pub fn create_router(state: Arc<AppState>) -> Router {
    let public = Router::new()
        .route("/auth/register", post(accounts::register))
        .route("/auth/login", post(accounts::login));

    let authenticated = Router::new()
        .route("/auth/me", get(accounts::me))
        .route(
            "/admin/users/{id}",
            get(accounts::get_user)
                .put(accounts::update_user)
                .delete(accounts::delete_user),
        )
        .route("/resources", get(resources::list).post(resources::create))
        .route(
            "/resources/{id}",
            get(resources::get_one)
                .put(resources::update)
                .delete(resources::delete),
        )
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_auth,
        ));

    let admin = Router::new()
        .route(
            "/admin/users",
            get(accounts::list_users).post(accounts::create_user),
        )
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_admin,
        ));

    Router::new()
        .merge(public)
        .merge(authenticated)
        .merge(admin)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
