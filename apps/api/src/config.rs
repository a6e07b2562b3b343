use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the career catalogue CSV. Required.
    pub data_file: String,
    pub port: u16,
    pub rust_log: String,
    /// Idle seconds before a session expires.
    pub session_timeout_secs: u64,
    /// How many careers a recommendation response carries.
    pub recommendation_count: usize,
    /// Records scoring below this percentage are dropped before the top-K
    /// cut. 0 disables the floor.
    pub min_match_percentage: u8,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_file: require_env("DATA_FILE")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_timeout_secs: parse_env("SESSION_TIMEOUT_SECS", 3600)?,
            recommendation_count: parse_env("RECOMMENDATION_COUNT", 5)?,
            min_match_percentage: parse_env("MIN_MATCH_PERCENTAGE", 0)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .ok()
            .with_context(|| format!("'{key}' must be a valid value")),
        Err(_) => Ok(default),
    }
}
