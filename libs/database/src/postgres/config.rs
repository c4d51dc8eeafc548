use core_config::{ConfigError, FromEnv, env_parse, env_required};
use sea_orm::ConnectOptions;
use std::time::Duration;

/// Connection pool settings for PostgreSQL.
///
/// ```ignore
/// use core_config::FromEnv;
/// use database::postgres::PostgresConfig;
///
/// let config = PostgresConfig::from_env()?;
/// let db = database::postgres::connect_from_config(config).await?;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    /// Log every statement through sqlx
    pub sqlx_logging: bool,
}

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_CONNECTIONS: u32 = 1;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 8;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 8;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600;
const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800;

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            max_lifetime: Duration::from_secs(DEFAULT_MAX_LIFETIME_SECS),
            sqlx_logging: false,
        }
    }

    pub fn with_pool_size(mut self, max_connections: u32, min_connections: u32) -> Self {
        self.max_connections = max_connections;
        self.min_connections = min_connections.min(max_connections);
        self
    }

    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .sqlx_logging(self.sqlx_logging);
        opt
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Environment variables:
/// - `DATABASE_URL` (required)
/// - `DB_MAX_CONNECTIONS` (default: 10)
/// - `DB_MIN_CONNECTIONS` (default: 1)
/// - `DB_CONNECT_TIMEOUT_SECS` (default: 8)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (default: 8)
/// - `DB_IDLE_TIMEOUT_SECS` (default: 600)
/// - `DB_MAX_LIFETIME_SECS` (default: 1800)
/// - `DB_SQLX_LOGGING` (default: false)
impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required("DATABASE_URL")?;
        let max_connections: u32 =
            env_parse("DB_MAX_CONNECTIONS", &DEFAULT_MAX_CONNECTIONS.to_string())?;
        let min_connections: u32 =
            env_parse("DB_MIN_CONNECTIONS", &DEFAULT_MIN_CONNECTIONS.to_string())?;

        if min_connections > max_connections {
            return Err(ConfigError::ParseError {
                key: "DB_MIN_CONNECTIONS".to_string(),
                details: format!(
                    "must not exceed DB_MAX_CONNECTIONS ({} > {})",
                    min_connections, max_connections
                ),
            });
        }

        let secs = |key: &str, default: u64| -> Result<Duration, ConfigError> {
            env_parse::<u64>(key, &default.to_string()).map(Duration::from_secs)
        };

        Ok(Self {
            url,
            max_connections,
            min_connections,
            connect_timeout: secs("DB_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
            acquire_timeout: secs("DB_ACQUIRE_TIMEOUT_SECS", DEFAULT_ACQUIRE_TIMEOUT_SECS)?,
            idle_timeout: secs("DB_IDLE_TIMEOUT_SECS", DEFAULT_IDLE_TIMEOUT_SECS)?,
            max_lifetime: secs("DB_MAX_LIFETIME_SECS", DEFAULT_MAX_LIFETIME_SECS)?,
            sqlx_logging: env_parse("DB_SQLX_LOGGING", "false")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_pool_defaults() {
        let config = PostgresConfig::new("postgresql://localhost/store");
        assert_eq!(config.url(), "postgresql://localhost/store");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
        assert!(!config.sqlx_logging);
    }

    #[test]
    fn test_with_pool_size_clamps_min() {
        let config = PostgresConfig::new("postgresql://localhost/store").with_pool_size(4, 8);
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.min_connections, 4);
    }

    #[test]
    fn test_from_env_minimal() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/store")),
                ("DB_MAX_CONNECTIONS", None),
                ("DB_MIN_CONNECTIONS", None),
                ("DB_CONNECT_TIMEOUT_SECS", None),
                ("DB_ACQUIRE_TIMEOUT_SECS", None),
                ("DB_IDLE_TIMEOUT_SECS", None),
                ("DB_MAX_LIFETIME_SECS", None),
                ("DB_SQLX_LOGGING", None),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config, PostgresConfig::new("postgresql://localhost/store"));
            },
        );
    }

    #[test]
    fn test_from_env_custom() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/store")),
                ("DB_MAX_CONNECTIONS", Some("20")),
                ("DB_MIN_CONNECTIONS", Some("2")),
                ("DB_CONNECT_TIMEOUT_SECS", Some("15")),
                ("DB_SQLX_LOGGING", Some("true")),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config.max_connections, 20);
                assert_eq!(config.min_connections, 2);
                assert_eq!(config.connect_timeout, Duration::from_secs(15));
                assert!(config.sqlx_logging);
            },
        );
    }

    #[test]
    fn test_from_env_missing_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = PostgresConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_from_env_invalid_number() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/store")),
                ("DB_MAX_CONNECTIONS", Some("lots")),
            ],
            || {
                let err = PostgresConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
            },
        );
    }

    #[test]
    fn test_from_env_min_above_max() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/store")),
                ("DB_MAX_CONNECTIONS", Some("2")),
                ("DB_MIN_CONNECTIONS", Some("5")),
            ],
            || {
                let err = PostgresConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("DB_MIN_CONNECTIONS"));
            },
        );
    }
}
