// ============================
// reshelf-backend-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Log level / `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Token signing secret. No default: loading fails when it is absent,
    /// so the process can never start with a silently defaulted key.
    pub token_secret: String,
    /// Token TTL in seconds
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: i64,
}

fn default_bind_addr() -> SocketAddr {
    ([127, 0, 0, 1], 3000).into()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_token_ttl_secs() -> i64 {
    60 * 60 * 24 // 24 hours
}

impl Settings {
    /// Load settings from `config.toml` overlaid with `RESHELF_*`
    /// environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load settings from an explicit config file path, still overlaid with
    /// the environment.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("RESHELF_"))
            .extract()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod config_tests;
