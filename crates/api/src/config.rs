use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`). Remote detectors
    /// can take a while on a cold model cache.
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Postgres connection string (required).
    pub database_url: String,
    /// Directory holding stored PNG files (default: `./data/images`).
    pub image_storage_dir: PathBuf,
    /// Base URL of the annotator service (default: `http://localhost:8189`).
    pub annotator_url: String,
    /// Per-call annotator timeout in seconds (default: `300`).
    pub annotator_timeout_secs: u64,
    /// Serve the GraphiQL explorer on `GET /graphql` (default: `true`).
    pub graphiql_enabled: bool,
    /// Directory holding the legacy static page (default: `./static`).
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `120`                      |
    /// | `SHUTDOWN_TIMEOUT_SECS`  | `30`                       |
    /// | `DATABASE_URL`           | required                   |
    /// | `IMAGE_STORAGE_DIR`      | `./data/images`            |
    /// | `ANNOTATOR_URL`          | `http://localhost:8189`    |
    /// | `ANNOTATOR_TIMEOUT_SECS` | `300`                      |
    /// | `GRAPHIQL_ENABLED`       | `true`                     |
    /// | `STATIC_DIR`             | `./static`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let image_storage_dir = std::env::var("IMAGE_STORAGE_DIR")
            .unwrap_or_else(|_| "./data/images".into())
            .into();

        let annotator_url =
            std::env::var("ANNOTATOR_URL").unwrap_or_else(|_| "http://localhost:8189".into());

        let annotator_timeout_secs: u64 = std::env::var("ANNOTATOR_TIMEOUT_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("ANNOTATOR_TIMEOUT_SECS must be a valid u64");

        let graphiql_enabled = parse_flag(
            &std::env::var("GRAPHIQL_ENABLED").unwrap_or_else(|_| "true".into()),
        )
        .expect("GRAPHIQL_ENABLED must be true or false");

        let static_dir = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "./static".into())
            .into();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            database_url,
            image_storage_dir,
            annotator_url,
            annotator_timeout_secs,
            graphiql_enabled,
            static_dir,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
