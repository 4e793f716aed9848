//! HTTP API: customer CRUD handlers, routing, configuration and request context.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
