// ============================
// reshelf-backend-lib/src/handlers/mod.rs
// ============================
//! Axum handlers: thin JSON shims over the services.

pub mod accounts;
pub mod resources;
