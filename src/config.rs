use anyhow::Context;
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_DATABASE_URL: &str = "sqlite://hrms.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_RATE_API_PER_MIN: u32 = 1000;
const DEFAULT_API_PREFIX: &str = "/api";
const DEFAULT_SEED_SAMPLE_DATA: bool = true;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173";
const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,

    // Rate limiting
    pub rate_api_per_min: u32,

    pub api_prefix: String,
    pub seed_sample_data: bool,

    /// Origins allowed to call the API from a browser, from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,

    pub log_dir: String,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", DEFAULT_SERVER_ADDR),
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,

            rate_api_per_min: parse_var("RATE_API_PER_MIN", DEFAULT_RATE_API_PER_MIN)?,

            api_prefix: var_or("API_PREFIX", DEFAULT_API_PREFIX),
            seed_sample_data: parse_var("SEED_SAMPLE_DATA", DEFAULT_SEED_SAMPLE_DATA)?,

            cors_origins: split_origins(&var_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),

            log_dir: var_or("LOG_DIR", DEFAULT_LOG_DIR),
            log_level: parse_var("LOG_LEVEL", DEFAULT_LOG_LEVEL)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            rate_api_per_min: DEFAULT_RATE_API_PER_MIN,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            seed_sample_data: DEFAULT_SEED_SAMPLE_DATA,
            cors_origins: split_origins(DEFAULT_CORS_ORIGINS),
            log_dir: DEFAULT_LOG_DIR.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}
