//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: which customer store backs the handlers
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request decoding and response encoding
//! - `errors.rs`: plain-text error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router from configuration (entrypoint used by `main.rs`).
pub async fn build_app(config: &ApiConfig) -> anyhow::Result<Router> {
    let services = services::build_services(config).await?;
    Ok(router(Arc::new(services)))
}

/// Build the router around already-constructed services.
///
/// Tests use this to inject their own store.
pub fn router(services: Arc<AppServices>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::request_context_middleware))
            .layer(Extension(services)),
    )
}

pub use services::AppServices;
