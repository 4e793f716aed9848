//! Customer persistence boundary.
//!
//! Handlers depend only on the `CustomerStore` trait; the in-memory store
//! backs tests/dev and the Postgres store backs production.

pub mod in_memory;
pub mod postgres;
pub mod query;
pub mod r#trait;

pub use in_memory::InMemoryCustomerStore;
pub use postgres::PostgresCustomerStore;
pub use query::Pagination;
pub use r#trait::{CustomerStore, StoreError};
