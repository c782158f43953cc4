use std::str::FromStr;

use axum::http::HeaderValue;

/// Errors raised while reading [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite connection URL (default: `sqlite://todo.db`).
    pub database_url: String,
    /// Upper bound on pooled connections (default: `5`).
    pub database_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `DATABASE_URL`             | `sqlite://todo.db`         |
    /// | `DATABASE_MAX_CONNECTIONS` | `5`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", "3000", "u16")?;
        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        )?;
        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", "30", "u64")?;
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://todo.db".into());
        let database_max_connections = parse_var("DATABASE_MAX_CONNECTIONS", "5", "u32")?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            database_max_connections,
        })
    }
}

fn parse_var<T: FromStr>(
    name: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = std::env::var(name).unwrap_or_else(|_| default.into());
    value.parse().map_err(|_| ConfigError::Invalid {
        name,
        expected,
        value,
    })
}

/// Split a comma-separated origin list, skipping blanks.
pub fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                name: "CORS_ORIGINS",
                expected: "origin",
                value: origin.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_skipped() {
        let origins = parse_origins(" http://a.test , ,http://b.test").unwrap();
        assert_eq!(origins, ["http://a.test", "http://b.test"]);
    }

    #[test]
    fn origin_with_control_characters_is_rejected() {
        let err = parse_origins("http://ok.test,bad\norigin").unwrap_err();
        assert!(err.to_string().contains("CORS_ORIGINS"));
    }
}
