use axum::http::HeaderMap;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request context carried by the request span.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Uuid,
}

impl RequestContext {
    pub fn new(request_id: Uuid) -> Self {
        Self { request_id }
    }

    /// Reuse the caller's `x-request-id` when it is a valid UUID, otherwise
    /// mint a fresh time-ordered one.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .unwrap_or_else(Uuid::now_v7);
        Self::new(request_id)
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn reuses_valid_incoming_id() {
        let id = Uuid::now_v7();
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&id.to_string()).unwrap());

        assert_eq!(RequestContext::from_headers(&headers).request_id(), id);
    }

    #[test]
    fn replaces_missing_or_malformed_id() {
        let ctx = RequestContext::from_headers(&HeaderMap::new());
        assert_eq!(ctx.request_id().get_version_num(), 7);

        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("not-a-uuid"));
        assert_eq!(RequestContext::from_headers(&headers).request_id().get_version_num(), 7);
    }
}
