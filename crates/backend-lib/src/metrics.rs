// ==============
// reshelf-backend-lib/src/metrics.rs

//! Central place for metric keys
pub const TOKEN_ISSUED: &str = "token.issued";
pub const ACCOUNT_REGISTERED: &str = "account.registered";
pub const ACCOUNT_DELETED: &str = "account.deleted";
pub const LOGIN_SUCCEEDED: &str = "login.succeeded";
pub const LOGIN_FAILED: &str = "login.failed";
pub const RESOURCE_CREATED: &str = "resource.created";
pub const RESOURCE_DELETED: &str = "resource.deleted";
