//! Service configuration read from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `BIND_ADDR` | `0.0.0.0:8080` |
//! | `DATABASE_URL` | unset: in-memory store |
//! | `DATABASE_MAX_CONNECTIONS` | `10` |
//! | `DATABASE_ACQUIRE_TIMEOUT_SECS` | `5` |
//! | `LOG_FORMAT` | `json` (`pretty` for plain text) |

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use clientele_infra::db::PoolSettings;
use clientele_observability::LogFormat;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Postgres URL. `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub pool: PoolSettings,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (empty values count as unset).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = PoolSettings::default();

        let bind_addr = parse_var::<SocketAddr>("BIND_ADDR", get("BIND_ADDR"))?
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));

        let max_connections = parse_var::<u32>("DATABASE_MAX_CONNECTIONS", get("DATABASE_MAX_CONNECTIONS"))?
            .unwrap_or(defaults.max_connections);
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                message: "must be at least 1".to_string(),
            });
        }

        let acquire_timeout = parse_var::<u64>("DATABASE_ACQUIRE_TIMEOUT_SECS", get("DATABASE_ACQUIRE_TIMEOUT_SECS"))?
            .map(Duration::from_secs)
            .unwrap_or(defaults.acquire_timeout);

        let log_format = parse_var::<LogFormat>("LOG_FORMAT", get("LOG_FORMAT"))?.unwrap_or_default();

        Ok(Self {
            bind_addr,
            database_url: get("DATABASE_URL"),
            pool: PoolSettings {
                max_connections,
                acquire_timeout,
            },
            log_format,
        })
    }
}

fn parse_var<T>(name: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    raw.map(|v| {
        v.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            name,
            message: e.to_string(),
        })
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_select_in_memory_store() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(cfg.bind_addr.port(), DEFAULT_PORT);
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.pool, PoolSettings::default());
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DATABASE_URL", "postgres://localhost/customers"),
            ("DATABASE_MAX_CONNECTIONS", "3"),
            ("DATABASE_ACQUIRE_TIMEOUT_SECS", "2"),
            ("LOG_FORMAT", "pretty"),
        ])
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/customers"));
        assert_eq!(cfg.pool.max_connections, 3);
        assert_eq!(cfg.pool.acquire_timeout, Duration::from_secs(2));
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn empty_database_url_counts_as_unset() {
        let cfg = config(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(cfg.database_url, None);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = config(&[("BIND_ADDR", "not-an-addr")]).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));

        let err = config(&[("DATABASE_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_MAX_CONNECTIONS"));

        let err = config(&[("LOG_FORMAT", "xml")]).unwrap_err();
        assert!(err.to_string().contains("LOG_FORMAT"));
    }
}
