use std::path::PathBuf;
use std::time::Duration;

use quandary_ai::AiConfig;
use quandary_db::location::{flag_enabled, resolve_database_path};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`). Covers provider calls,
    /// which get [`provider_deadline`](Self::provider_deadline) of it.
    pub request_timeout_secs: u64,
    /// SQLite file location.
    pub database_path: PathBuf,
    /// Text provider credentials and models.
    pub ai: AiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                           |
    /// |------------------------|-----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                         |
    /// | `PORT`                 | `5000`                            |
    /// | `CORS_ORIGINS`         | `http://localhost:5000`           |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                              |
    /// | `DATABASE_PATH`        | see below                         |
    /// | `VERCEL`/`SERVERLESS`  | unset                             |
    ///
    /// Without `DATABASE_PATH` the database is `ethical_game.db` in the
    /// working directory, or in the temp directory when a serverless flag
    /// is set.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let serverless = flag_enabled(std::env::var("VERCEL").ok().as_deref())
            || flag_enabled(std::env::var("SERVERLESS").ok().as_deref());
        let database_path = resolve_database_path(
            std::env::var("DATABASE_PATH").ok().as_deref(),
            serverless,
            &std::env::temp_dir(),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_path,
            ai: AiConfig::from_env(),
        }
    }

    /// Total time text providers may spend on one request: half the
    /// request timeout, leaving the rest for fallbacks and storage.
    pub fn provider_deadline(&self) -> Duration {
        Duration::from_millis(self.request_timeout_secs.saturating_mul(1000) / 2)
    }
}
