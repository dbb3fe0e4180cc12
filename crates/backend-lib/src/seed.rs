// ============================
// reshelf-backend-lib/src/seed.rs
// ============================
//! Explicit startup seeding.
use reshelf_common::Role;

use crate::auth::password;
use crate::models::Account;
use crate::AppState;

pub const DEFAULT_ADMIN_NAME: &str = "Administrator";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@mail.ru";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Create the default administrator when the account collection is empty.
///
/// Runs once at startup; data access never seeds implicitly.
pub async fn ensure_default_admin(state: &AppState) -> anyhow::Result<()> {
    let store = state.accounts.store();
    if !store.is_empty().await {
        return Ok(());
    }

    let password_hash = password::hash_password(DEFAULT_ADMIN_PASSWORD)?;
    let account = Account::new(
        DEFAULT_ADMIN_NAME.to_string(),
        DEFAULT_ADMIN_EMAIL.to_string(),
        password_hash,
        Role::Admin,
    );
    tracing::info!(email = DEFAULT_ADMIN_EMAIL, account_id = %account.id, "seeded default administrator");
    store.insert(account).await;
    Ok(())
}
