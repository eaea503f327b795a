use anyhow::Result;

/// Runtime configuration for the console harness, loaded from environment
/// variables. Every field has a default; a missing .env is fine.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
