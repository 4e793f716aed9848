//! Database connection pool wiring.

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::customer_store::postgres::map_sqlx_error;
use crate::customer_store::StoreError;

/// Connection pool settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Open a Postgres connection pool.
pub async fn connect(database_url: &str, settings: PoolSettings) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(database_url)
        .await
        .map_err(|e| map_sqlx_error("connect", e))?;

    tracing::info!(max_connections = settings.max_connections, "connected to postgres");
    Ok(pool)
}
