use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; the service runs on an in-process store by default.
#[derive(Debug, Clone)]
pub struct Config {
    /// When set, documents persist in Redis instead of process memory.
    pub redis_url: Option<String>,
    /// Namespace prepended to every Redis key.
    pub store_key_prefix: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            redis_url: optional_env("REDIS_URL"),
            store_key_prefix: optional_env("STORE_KEY_PREFIX").unwrap_or_default(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank values are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
