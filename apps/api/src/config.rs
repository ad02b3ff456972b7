use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The narrative generator runs offline when `AI_OFFLINE=true` or when no
/// API key is configured — the service never fails to start over a missing key.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub ai_offline: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            openai_api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            ai_offline: std::env::var("AI_OFFLINE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test for the env-derived fields to avoid racing on process env.
    #[test]
    fn test_from_env_defaults() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/gabay_test");
        std::env::remove_var("DATABASE_MAX_CONNECTIONS");
        std::env::remove_var("AI_OFFLINE");
        std::env::remove_var("PORT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.port, 8080);
        assert!(!config.ai_offline);
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
    }
}
