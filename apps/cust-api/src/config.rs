//! Runtime configuration from environment variables

use std::env;

/// Configuration for the HTTP service
///
/// All values carry defaults so the service starts with no environment at
/// all: port 8080, a local PostgreSQL DSN, and an empty CORS allow-list
/// (which permits every origin).
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the server listens on (`APP_PORT`, default `8080`)
    pub port: String,

    /// PostgreSQL DSN (`PG_DSN`; when unset or blank, composed from
    /// `DB_USER`/`DB_PASS`/`DB_HOST`/`DB_PORT`/`DB_NAME`/`DB_SSLMODE`)
    pub pg_dsn: String,

    /// Allowed cross-origin hosts (`CORS_ALLOW_ORIGINS`, comma-separated;
    /// empty means allow all)
    pub cors_allow: Vec<String>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Self {
        let port = env_or("APP_PORT", "8080");

        let mut pg_dsn = env::var("PG_DSN").unwrap_or_default();
        if pg_dsn.trim().is_empty() {
            let user = env_or("DB_USER", "custsvc");
            let pass = env_or("DB_PASS", "secret");
            let host = env_or("DB_HOST", "localhost");
            let db_port = env_or("DB_PORT", "5432");
            let name = env_or("DB_NAME", "custsvc");
            let ssl = env_or("DB_SSLMODE", "disable");
            pg_dsn = format!("postgres://{user}:{pass}@{host}:{db_port}/{name}?sslmode={ssl}");
        }

        let cors_allow = env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            port,
            pg_dsn,
            cors_allow,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
