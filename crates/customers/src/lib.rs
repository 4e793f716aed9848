//! Customers domain module.
//!
//! The customer record, the client-supplied payload, and the rules the HTTP
//! handlers apply to them. Pure logic: no IO, no HTTP, no storage.

pub mod customer;
pub mod number;

pub use customer::{Customer, CustomerDetails};
