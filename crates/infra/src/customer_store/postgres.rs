//! Postgres-backed customer store.
//!
//! Reads and writes the `customers` table (see `sql/customers.sql`).
//!
//! ## Error Mapping
//!
//! | SQLx Error | PostgreSQL Error Code | StoreError |
//! |------------|----------------------|------------|
//! | RowNotFound | N/A | `NotFound` |
//! | Database (unique violation) | `23505` | `Conflict` |
//! | Database (other) | any other | `Storage` |
//! | PoolClosed, PoolTimedOut, Io, ... | N/A | `Storage` |

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use clientele_core::CustomerId;
use clientele_customers::{Customer, CustomerDetails};

use super::query::Pagination;
use super::r#trait::{CustomerStore, StoreError};

const COLUMNS: &str = "id, created_at, updated_at, name, email, address, number";

/// Postgres-backed customer store.
///
/// `PgPool` is `Send + Sync`; the store can be shared across request tasks.
/// Every operation is a single statement, so there is no transaction spanning
/// a lookup and the mutation that follows it.
#[derive(Debug, Clone)]
pub struct PostgresCustomerStore {
    pool: Arc<PgPool>,
}

impl PostgresCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    #[instrument(skip(self, details), err)]
    async fn create(&self, details: CustomerDetails) -> Result<Customer, StoreError> {
        let sql = format!(
            "INSERT INTO customers (name, email, address, number) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&details.name)
            .bind(&details.email)
            .bind(&details.address)
            .bind(&details.number)
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("create_customer", e))?;

        row_to_customer(&row)
    }

    #[instrument(skip(self), err)]
    async fn find_by_email(&self, email: &str) -> Result<Customer, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM customers WHERE email = $1 ORDER BY id LIMIT 1");
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_customer_by_email", e))?;

        match row {
            Some(row) => row_to_customer(&row),
            None => Err(StoreError::NotFound),
        }
    }

    #[instrument(skip(self, customer), fields(customer_id = %customer.id), err)]
    async fn delete(&self, customer: &Customer) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(customer.id.get())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_customer", e))?;
        Ok(())
    }

    #[instrument(skip(self, customer), fields(customer_id = %customer.id), err)]
    async fn save(&self, customer: &Customer) -> Result<Customer, StoreError> {
        let sql = format!(
            "INSERT INTO customers (id, created_at, updated_at, name, email, address, number) \
             VALUES ($1, $2, now(), $3, $4, $5, $6) \
             ON CONFLICT (id) DO UPDATE SET \
                 updated_at = now(), \
                 name = EXCLUDED.name, \
                 email = EXCLUDED.email, \
                 address = EXCLUDED.address, \
                 number = EXCLUDED.number \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(customer.id.get())
            .bind(customer.created_at)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.address)
            .bind(&customer.number)
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("save_customer", e))?;

        row_to_customer(&row)
    }

    #[instrument(skip(self), err)]
    async fn list_page(&self, pagination: Pagination) -> Result<Vec<Customer>, StoreError> {
        // LIMIT NULL is LIMIT ALL in Postgres.
        let limit: Option<i64> = pagination.limit.map(clamp_i64);
        let offset: i64 = clamp_i64(pagination.offset);

        let sql = format!("SELECT {COLUMNS} FROM customers ORDER BY id LIMIT $1 OFFSET $2");
        let rows = sqlx::query(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_customers", e))?;

        rows.iter().map(row_to_customer).collect()
    }
}

fn clamp_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn row_to_customer(row: &PgRow) -> Result<Customer, StoreError> {
    let read = |e: sqlx::Error| StoreError::storage(format!("failed to read customer row: {e}"));

    Ok(Customer {
        id: CustomerId::new(row.try_get::<i64, _>("id").map_err(read)?),
        created_at: row.try_get("created_at").map_err(read)?,
        updated_at: row.try_get("updated_at").map_err(read)?,
        name: row.try_get("name").map_err(read)?,
        email: row.try_get("email").map_err(read)?,
        address: row.try_get("address").map_err(read)?,
        number: row.try_get("number").map_err(read)?,
    })
}

/// Map a sqlx error to a `StoreError` (see module docs for the table).
pub(crate) fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::Database(db_err) => {
            let msg = format!("database error in {}: {}", operation, db_err.message());
            match db_err.code().as_deref() {
                Some("23505") => StoreError::Conflict(msg),
                _ => StoreError::Storage(msg),
            }
        }
        sqlx::Error::PoolClosed => {
            StoreError::Storage(format!("connection pool closed in {}", operation))
        }
        _ => StoreError::Storage(format!("sqlx error in {}: {}", operation, err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert_eq!(map_sqlx_error("op", sqlx::Error::RowNotFound), StoreError::NotFound);
    }

    #[test]
    fn pool_errors_map_to_storage_with_operation_name() {
        match map_sqlx_error("list_customers", sqlx::Error::PoolClosed) {
            StoreError::Storage(msg) => assert!(msg.contains("list_customers")),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            map_sqlx_error("create_customer", sqlx::Error::PoolTimedOut),
            StoreError::Storage(_)
        ));
    }

    #[test]
    fn clamp_saturates_large_values() {
        assert_eq!(clamp_i64(5), 5);
        assert_eq!(clamp_i64(u64::MAX), i64::MAX);
    }
}
