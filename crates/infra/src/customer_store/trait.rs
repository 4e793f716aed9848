use async_trait::async_trait;
use thiserror::Error;

use clientele_customers::{Customer, CustomerDetails};

use super::query::Pagination;

/// Customer store operation error.
///
/// `NotFound` is the only variant callers branch on; everything else is an
/// opaque storage failure whose text may be surfaced to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("constraint violation: {0}")]
    Conflict(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// CRUD access to the customer relation.
///
/// Each call is independent: no lock or transaction spans two calls, so a
/// lookup followed by a mutation can race with a concurrent writer.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert a new record. The store assigns `id` and the timestamps.
    async fn create(&self, details: CustomerDetails) -> Result<Customer, StoreError>;

    /// First record (lowest `id`) whose email equals `email`.
    ///
    /// Returns `StoreError::NotFound` when nothing matches.
    async fn find_by_email(&self, email: &str) -> Result<Customer, StoreError>;

    /// Remove the record with `customer.id`. Removing a missing row is not an error.
    async fn delete(&self, customer: &Customer) -> Result<(), StoreError>;

    /// Write every field of `customer` back, keyed by `id`, refreshing `updated_at`.
    ///
    /// A record whose `id` is not stored is inserted.
    async fn save(&self, customer: &Customer) -> Result<Customer, StoreError>;

    /// One page of records in ascending `id` order.
    async fn list_page(&self, pagination: Pagination) -> Result<Vec<Customer>, StoreError>;
}
