// ============================
// reshelf-backend-lib/src/auth/mod.rs
// ============================
//! Authentication module: credential hashing, bearer token lifecycle and
//! the per-request authorization guard.

pub mod guard;
pub mod password;
pub mod token;

pub use guard::{authorize, require_admin, require_auth, RouteClass};
pub use password::{hash_password, hash_password_secure, verify_password};
pub use token::{Claims, TokenError, TokenService, TOKEN_TTL_SECS};
