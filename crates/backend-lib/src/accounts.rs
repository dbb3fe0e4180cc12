// ============================
// reshelf-backend-lib/src/accounts.rs
// ============================
//! Account service: registration, login, admin-driven CRUD.
use std::sync::Arc;

use metrics::counter;
use reshelf_common::{
    CreateUserRequest, LoginRequest, RegisterRequest, Role, UpdateUserRequest,
};
use tokio::sync::Mutex;

use crate::auth::{password, TokenService};
use crate::error::AppError;
use crate::metrics::{ACCOUNT_DELETED, ACCOUNT_REGISTERED, LOGIN_FAILED, LOGIN_SUCCEEDED};
use crate::models::{Account, AccountPatch};
use crate::store::Collection;
use crate::validation::{require_field, validate_email};

/// Account service.
///
/// The repository has no cross-call atomicity, so every uniqueness-sensitive
/// mutation (register, admin create, email change) runs under `write_lock`:
/// two concurrent registrations of the same email can never both pass the
/// duplicate check.
pub struct AccountService {
    accounts: Arc<Collection<Account>>,
    tokens: Arc<TokenService>,
    write_lock: Mutex<()>,
}

impl AccountService {
    pub fn new(accounts: Arc<Collection<Account>>, tokens: Arc<TokenService>) -> Self {
        Self {
            accounts,
            tokens,
            write_lock: Mutex::new(()),
        }
    }

    /// Repository handle, shared with the seeding routine.
    pub fn store(&self) -> &Arc<Collection<Account>> {
        &self.accounts
    }

    /// Self-service registration. Role is always `User`.
    pub async fn register(&self, req: RegisterRequest) -> Result<Account, AppError> {
        let name = require_field(req.name.as_deref(), "please fill in all fields")?;
        let email = require_field(req.email.as_deref(), "please fill in all fields")?;
        let mut pass = require_field(req.password.as_deref(), "please fill in all fields")?;
        validate_email(&email)?;

        // hashing is slow on purpose; keep it outside the lock
        let password_hash = password::hash_password_secure(&mut pass)?;
        self.insert_unique(Account::new(name, email, password_hash, Role::User))
            .await
    }

    /// Admin-driven account creation with an explicitly settable role.
    pub async fn admin_create(&self, req: CreateUserRequest) -> Result<Account, AppError> {
        let name = require_field(req.name.as_deref(), "please fill in all required fields")?;
        let email = require_field(req.email.as_deref(), "please fill in all required fields")?;
        let mut pass =
            require_field(req.password.as_deref(), "please fill in all required fields")?;
        validate_email(&email)?;

        let password_hash = password::hash_password_secure(&mut pass)?;
        let role = req.role.unwrap_or_default();
        self.insert_unique(Account::new(name, email, password_hash, role))
            .await
    }

    async fn insert_unique(&self, account: Account) -> Result<Account, AppError> {
        let _guard = self.write_lock.lock().await;
        let email = account.email.clone();
        if self.accounts.find_one(|a| a.email == email).await.is_some() {
            return Err(AppError::Validation(
                "a user with this email already exists".to_string(),
            ));
        }
        self.accounts.insert(account.clone()).await;

        counter!(ACCOUNT_REGISTERED).increment(1);
        tracing::info!(account_id = %account.id, collection = self.accounts.name(), "account created");
        Ok(account)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown email and wrong password produce the same error, so the
    /// response never reveals which half was wrong.
    pub async fn login(&self, req: LoginRequest) -> Result<(Account, String), AppError> {
        let email = require_field(req.email.as_deref(), "please provide email and password")?;
        let pass = require_field(req.password.as_deref(), "please provide email and password")?;

        let account = self.accounts.find_one(|a| a.email == email).await;
        let Some(account) = account else {
            counter!(LOGIN_FAILED).increment(1);
            return Err(AppError::InvalidCredentials);
        };
        if !password::verify_password(&account.password_hash, &pass) {
            counter!(LOGIN_FAILED).increment(1);
            return Err(AppError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&account.id, &account.email, account.role)?;
        counter!(LOGIN_SUCCEEDED).increment(1);
        tracing::debug!(account_id = %account.id, "login succeeded");
        Ok((account, token))
    }

    /// Fetch one account by id.
    pub async fn get(&self, id: &str) -> Result<Account, AppError> {
        self.accounts
            .find_by_id(id)
            .await
            .ok_or(AppError::NotFound("user"))
    }

    /// All accounts, in insertion order. Admin only.
    pub async fn list_all(&self, caller_role: Role) -> Result<Vec<Account>, AppError> {
        if !caller_role.is_admin() {
            return Err(AppError::Forbidden);
        }
        Ok(self.accounts.find_all().await)
    }

    /// Update an account.
    ///
    /// Admins may update anyone, including roles. Other callers may update
    /// only themselves, and only name/email — a role field from a non-admin
    /// is rejected outright.
    pub async fn update(
        &self,
        caller_id: &str,
        caller_role: Role,
        target_id: &str,
        req: UpdateUserRequest,
    ) -> Result<Account, AppError> {
        if !caller_role.is_admin() && caller_id != target_id {
            return Err(AppError::Forbidden);
        }
        if !caller_role.is_admin() && req.role.is_some() {
            return Err(AppError::Forbidden);
        }

        let name = match req.name.as_deref() {
            Some(value) => Some(require_field(Some(value), "name cannot be empty")?),
            None => None,
        };
        let email = match req.email.as_deref() {
            Some(value) => {
                let email = require_field(Some(value), "email cannot be empty")?;
                validate_email(&email)?;
                Some(email)
            },
            None => None,
        };

        // the email uniqueness check and the write must not be interleaved
        // with another registration or update
        let _guard = self.write_lock.lock().await;
        if let Some(new_email) = &email {
            let clash = self
                .accounts
                .find_one(|a| a.email == *new_email && a.id != target_id)
                .await;
            if clash.is_some() {
                return Err(AppError::Validation(
                    "a user with this email already exists".to_string(),
                ));
            }
        }

        let patch = AccountPatch {
            name,
            email,
            role: req.role,
        };
        self.accounts
            .update_by_id(target_id, patch)
            .await
            .ok_or(AppError::NotFound("user"))
    }

    /// Delete an account.
    ///
    /// Self-deletion is rejected before anything else, so even an admin
    /// acting on their own id gets a validation error. Beyond that, only
    /// admins may delete accounts.
    pub async fn delete(
        &self,
        caller_id: &str,
        caller_role: Role,
        target_id: &str,
    ) -> Result<(), AppError> {
        if caller_id == target_id {
            return Err(AppError::Validation(
                "you cannot delete your own account".to_string(),
            ));
        }
        if !caller_role.is_admin() {
            return Err(AppError::Forbidden);
        }

        let _guard = self.write_lock.lock().await;
        let removed = self
            .accounts
            .delete_by_id(target_id)
            .await
            .ok_or(AppError::NotFound("user"))?;

        counter!(ACCOUNT_DELETED).increment(1);
        tracing::info!(account_id = %removed.id, "account deleted");
        Ok(())
    }
}
