//! Infrastructure wiring: which `CustomerStore` backs the handlers.

use std::sync::Arc;

use clientele_infra::{db, CustomerStore, InMemoryCustomerStore, PostgresCustomerStore, StoreError};

use crate::config::ApiConfig;

/// Shared per-process dependencies handed to every handler.
#[derive(Clone)]
pub struct AppServices {
    customers: Arc<dyn CustomerStore>,
}

impl AppServices {
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        Self { customers }
    }

    /// Services backed by a fresh in-memory store (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCustomerStore::new()))
    }

    pub fn customers(&self) -> &dyn CustomerStore {
        self.customers.as_ref()
    }
}

/// Build services from configuration: Postgres when a database URL is set,
/// the in-memory store otherwise.
pub async fn build_services(config: &ApiConfig) -> Result<AppServices, StoreError> {
    match &config.database_url {
        Some(url) => {
            let pool = db::connect(url, config.pool).await?;
            Ok(AppServices::new(Arc::new(PostgresCustomerStore::new(pool))))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory customer store");
            Ok(AppServices::in_memory())
        }
    }
}
