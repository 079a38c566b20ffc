use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_MAX_RESUME_CHARS: usize = 4000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Application configuration loaded from environment variables.
/// Only `DATABASE_URL` is required; a missing provider key disables that provider.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub openai_api_key: Option<String>,
    pub use_gpt4: bool,
    pub deepseek_api_key: Option<String>,
    pub jooble_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_resume_chars: usize,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            openai_api_key: optional_env("OPENAI_API_KEY"),
            use_gpt4: optional_env("USE_GPT4").is_some_and(|v| v.eq_ignore_ascii_case("true")),
            deepseek_api_key: optional_env("DEEPSEEK_API_KEY")
                .or_else(|| optional_env("DEEPSEEK_REASONER_API")),
            jooble_api_key: optional_env("JOOBLE_API_KEY"),
            port: parse_env("PORT", DEFAULT_PORT)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_resume_chars: parse_env("MAX_RESUME_CHARS", DEFAULT_MAX_RESUME_CHARS)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
