use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub candidates_file: PathBuf,
    pub host: String,
    pub port: u16,
    /// The one origin allowed to call the API cross-origin.
    pub cors_origin: HeaderValue,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let cors_origin = env_or("CORS_ORIGIN", "http://localhost:5173");

        Ok(Config {
            candidates_file: PathBuf::from(env_or("CANDIDATES_FILE", "mock-data/candidates.json")),
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            cors_origin: HeaderValue::from_str(&cors_origin)
                .with_context(|| format!("CORS_ORIGIN '{cors_origin}' is not a valid origin"))?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
