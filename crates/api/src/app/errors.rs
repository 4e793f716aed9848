//! Plain-text error responses.
//!
//! Lookup failures echo the store's error text; mutation failures use fixed
//! messages. Clients already depend on both forms, so they are kept as is.
//! Every error body is the message plus a trailing newline, served with
//! `X-Content-Type-Options: nosniff`.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use clientele_core::DomainError;
use clientele_infra::StoreError;
pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";
pub const ADD_FAILED: &str = "Failed to add customer to the database";
pub const DELETE_FAILED: &str = "Failed to delete customer from database";
pub const UPDATE_FAILED: &str = "Failed to update customer in database";
pub const MARSHAL_FAILED: &str = "Failed to marshal customers";

pub fn text_error(status: StatusCode, message: impl Into<String>) -> Response {
    let mut body = message.into();
    body.push('\n');
    (
        status,
        [(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"))],
        body,
    )
        .into_response()
}

/// Invalid client input: 400 with the validation message.
pub fn domain_error_to_response(err: DomainError) -> Response {
    text_error(StatusCode::BAD_REQUEST, err.to_string())
}

/// Response for a failed lookup-by-email: 404 on a miss, 500 with the
/// store's error text otherwise.
pub fn lookup_error_to_response(err: StoreError) -> Response {
    match err {
        StoreError::NotFound => text_error(StatusCode::NOT_FOUND, CUSTOMER_NOT_FOUND),
        other => {
            tracing::error!(error = %other, "customer lookup failed");
            text_error(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}
