use std::time::{Duration, Instant};

use axum::{http::HeaderValue, middleware::Next, response::Response};
use tracing::Instrument;

use crate::context::{RequestContext, REQUEST_ID_HEADER};

/// Run the request inside a span carrying its id, log the outcome, and echo
/// the id back in `x-request-id`.
pub async fn request_context_middleware(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let ctx = RequestContext::from_headers(req.headers());

    let span = tracing::info_span!(
        "request",
        request_id = %ctx.request_id(),
        method = %req.method(),
        path = %req.uri().path(),
    );

    let started = Instant::now();
    let mut res = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(
            status = res.status().as_u16(),
            latency_ms = millis(started.elapsed()),
            "request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&ctx.request_id().to_string()) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    res
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latency_saturates_instead_of_truncating() {
        assert_eq!(millis(Duration::from_millis(1500)), 1500);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
