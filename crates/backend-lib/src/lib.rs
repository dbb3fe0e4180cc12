// ============================
// reshelf-backend-lib/src/lib.rs
// ============================
//! Core backend-lib functionality for the `reshelf` resource catalogue
//! server: authentication, role/ownership authorization and CRUD over the
//! account and resource collections.

pub mod accounts;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod resources;
pub mod router;
pub mod seed;
pub mod store;
pub mod validation;

use std::sync::Arc;

use crate::accounts::AccountService;
use crate::auth::TokenService;
use crate::config::Settings;
use crate::models::{Account, Resource};
use crate::resources::ResourceService;
use crate::store::Collection;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Account service (registration, login, admin CRUD)
    pub accounts: Arc<AccountService>,
    /// Resource service (owned content CRUD)
    pub resources: Arc<ResourceService>,
    /// Token issuer/validator
    pub tokens: Arc<TokenService>,
    /// Settings manager
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The repositories are constructed here and injected into the services;
    /// nothing is seeded implicitly — call [`seed::ensure_default_admin`]
    /// once at startup.
    pub fn new(settings: Settings) -> Self {
        let account_store: Arc<Collection<Account>> = Arc::new(Collection::new("users"));
        let resource_store: Arc<Collection<Resource>> = Arc::new(Collection::new("resources"));
        let tokens = Arc::new(TokenService::new(
            &settings.token_secret,
            settings.token_ttl_secs,
        ));

        let accounts = Arc::new(AccountService::new(
            Arc::clone(&account_store),
            Arc::clone(&tokens),
        ));
        let resources = Arc::new(ResourceService::new(resource_store, account_store));

        Self {
            accounts,
            resources,
            tokens,
            settings: Arc::new(settings),
        }
    }
}
