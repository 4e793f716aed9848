//! Customer CRUD handlers.
//!
//! Each handler runs one linear pass: decode, validate, look up (delete and
//! update only), mutate, respond. The first failure ends the request.
//!
//! Known limitation: delete and update look the record up and then mutate
//! it in two separate store calls. A concurrent delete between the two is
//! not detected; the later call acts on the row it already read.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub const ADDED: &str = "Customer added successfully.";
pub const DELETED: &str = "Customer deleted successfully.";
pub const UPDATED: &str = "Customer's information updated successfully.";

pub fn router() -> Router {
    Router::new().route(
        "/customers",
        get(list_customers)
            .post(add_customer)
            .delete(delete_customer)
            .put(update_customer)
            .patch(update_customer),
    )
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    let pagination = dto::pagination_from_query(&query);

    match services.customers().list_page(pagination).await {
        Ok(customers) => dto::customers_to_response(&customers),
        Err(e) => {
            tracing::error!(error = %e, ?pagination, "listing customers failed");
            errors::text_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn add_customer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Response {
    let details = match dto::decode_customer(&body) {
        Ok(d) => d,
        Err(res) => return res,
    };

    match services.customers().create(details).await {
        Ok(customer) => {
            tracing::info!(customer_id = %customer.id, "customer added");
            (StatusCode::ACCEPTED, ADDED).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "adding customer failed");
            errors::text_error(StatusCode::INTERNAL_SERVER_ERROR, errors::ADD_FAILED)
        }
    }
}

pub async fn delete_customer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Response {
    let details = match dto::decode_customer(&body) {
        Ok(d) => d,
        Err(res) => return res,
    };
    let email = match details.require_email() {
        Ok(email) => email,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let customer = match services.customers().find_by_email(email).await {
        Ok(c) => c,
        Err(e) => return errors::lookup_error_to_response(e),
    };

    match services.customers().delete(&customer).await {
        Ok(()) => {
            tracing::info!(customer_id = %customer.id, "customer deleted");
            (StatusCode::OK, DELETED).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, customer_id = %customer.id, "deleting customer failed");
            errors::text_error(StatusCode::INTERNAL_SERVER_ERROR, errors::DELETE_FAILED)
        }
    }
}

/// Full replace of name, email, address and number, keyed by the payload's
/// email. Since the email is both key and overwritten value, it cannot
/// actually change through this path.
pub async fn update_customer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Response {
    let details = match dto::decode_customer(&body) {
        Ok(d) => d,
        Err(res) => return res,
    };
    let email = match details.require_email() {
        Ok(email) => email.to_owned(),
        Err(e) => return errors::domain_error_to_response(e),
    };

    let mut customer = match services.customers().find_by_email(&email).await {
        Ok(c) => c,
        Err(e) => return errors::lookup_error_to_response(e),
    };

    customer.replace_details(details);

    match services.customers().save(&customer).await {
        Ok(saved) => {
            tracing::info!(customer_id = %saved.id, "customer updated");
            (StatusCode::OK, UPDATED).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, customer_id = %customer.id, "updating customer failed");
            errors::text_error(StatusCode::INTERNAL_SERVER_ERROR, errors::UPDATE_FAILED)
        }
    }
}
