//! Infrastructure layer: customer persistence and database wiring.

pub mod customer_store;
pub mod db;

pub use customer_store::{
    CustomerStore, InMemoryCustomerStore, Pagination, PostgresCustomerStore, StoreError,
};
