// ================
// common/src/lib.rs
// ================
//! Wire types shared between the `reshelf` server and its clients.
//! Defines the role enum, the public (password-free) entity views and
//! every request/response body of the JSON API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role. Closed set: every authorization decision matches on it
/// exhaustively.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Public view of an account. The password hash is not a field here, so it
/// can never be serialized outward by accident.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of a resource record.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePublic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Resource row as returned by the listing endpoint: the public view plus
/// the creator's display name (or a placeholder when the creator account no
/// longer exists).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResourceView {
    #[serde(flatten)]
    pub resource: ResourcePublic,
    pub creator_name: String,
}

// ---- request bodies ----
//
// Every field is optional at the wire level so that an absent or null field
// surfaces as a 400 validation error from the service instead of a
// deserialization rejection.

/// Body of `POST /auth/register`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /admin/users`. Role is settable, defaulting to `User`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// Body of `PUT /admin/users/{id}`. Only supplied fields change.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

/// Body of `POST /resources`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreateResourceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Body of `PUT /resources/{id}`. Only supplied fields change.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateResourceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

// ---- response bodies ----

/// `{ "user": … }`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub user: UserPublic,
}

/// `{ "users": […] }`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UsersResponse {
    pub users: Vec<UserPublic>,
}

/// `{ "user": …, "token": … }` returned by login.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub user: UserPublic,
    pub token: String,
}

/// `{ "resource": … }`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResourceResponse {
    pub resource: ResourcePublic,
}

/// `{ "resources": […] }`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResourcesResponse {
    pub resources: Vec<ResourceView>,
}

/// Plain confirmation body used by the delete endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body shared by every failing response: `{ "error": … }`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}
