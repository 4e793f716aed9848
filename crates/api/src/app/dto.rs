//! Request decoding and response encoding helpers.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use clientele_customers::{Customer, CustomerDetails};
use clientele_infra::Pagination;

use crate::app::errors;

/// Decode a customer payload from a raw request body.
///
/// The body is decoded whatever its `Content-Type`; on failure the 400
/// response carries the decoder's message.
pub fn decode_customer(body: &[u8]) -> Result<CustomerDetails, Response> {
    serde_json::from_slice(body).map_err(|e| errors::text_error(StatusCode::BAD_REQUEST, e.to_string()))
}

/// Pagination from `?limit=&offset=`; the first occurrence of each key wins.
pub fn pagination_from_query(pairs: &[(String, String)]) -> Pagination {
    let first = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    Pagination::from_query(first("limit"), first("offset"))
}

/// 200 with the customers as a JSON array.
pub fn customers_to_response(customers: &[Customer]) -> Response {
    match serde_json::to_vec(customers) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode customer list");
            errors::text_error(StatusCode::INTERNAL_SERVER_ERROR, errors::MARSHAL_FAILED)
        }
    }
}
