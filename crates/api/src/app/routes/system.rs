use axum::http::StatusCode;

pub const HEALTHY: &str = "API is up and running.";

pub async fn healthcheck() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTHY)
}
