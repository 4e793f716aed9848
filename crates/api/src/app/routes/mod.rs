use axum::{routing::any, Router};

pub mod customers;
pub mod system;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/healthcheck", any(system::healthcheck))
        .merge(customers::router())
}
