// ============================
// reshelf-backend-lib/src/models.rs
// ============================
//! Entity records and their partial-update patches.
use chrono::{DateTime, Utc};
use reshelf_common::{ResourcePublic, Role, UserPublic};
use uuid::Uuid;

use crate::store::{Entity, Patch};

/// A stored account. `password_hash` never leaves the process; outward
/// serialization goes through [`UserPublic`], which has no such field.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn new(name: String, email: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Account {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl From<&Account> for UserPublic {
    fn from(account: &Account) -> Self {
        UserPublic {
            id: account.id.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Partial update for an [`Account`].
#[derive(Debug, Default)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl Patch<Account> for AccountPatch {
    fn apply(self, target: &mut Account) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(email) = self.email {
            target.email = email;
        }
        if let Some(role) = self.role {
            target.role = role;
        }
    }
}

/// A stored resource record. `created_by` references the creating account's
/// id; it is set from the authenticated caller, never from the client body.
/// Deleting the creator leaves the reference dangling on purpose — the
/// listing substitutes a placeholder name instead.
#[derive(Debug, Clone)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    pub fn new(title: String, description: String, created_by: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Resource {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl From<&Resource> for ResourcePublic {
    fn from(resource: &Resource) -> Self {
        ResourcePublic {
            id: resource.id.clone(),
            title: resource.title.clone(),
            description: resource.description.clone(),
            created_by: resource.created_by.clone(),
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        }
    }
}

/// Partial update for a [`Resource`].
#[derive(Debug, Default)]
pub struct ResourcePatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Patch<Resource> for ResourcePatch {
    fn apply(self, target: &mut Resource) {
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(description) = self.description {
            target.description = description;
        }
    }
}
