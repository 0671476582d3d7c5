use axum::extract::{Extension, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::server::app::AppState;
use crate::server::error::ApiError;

/// API key middleware for the /api routes.
///
/// Accepts the key from the `x-api-key` header or the `key` query
/// parameter and rejects everything else with 401 before the handler runs.
pub async fn require_api_key(
    Extension(state): Extension<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !has_valid_key(&request, &state.config.api_key) {
        return ApiError::Unauthorized.into_response();
    }

    next.run(request).await
}

/// Check the request for a matching key.
fn has_valid_key(request: &Request, expected: &str) -> bool {
    if let Some(header_key) = request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
    {
        return header_key == expected;
    }

    query_param(request.uri().query().unwrap_or(""), "key")
        .map(|key| key == expected)
        .unwrap_or(false)
}

/// Pull one parameter out of a query string.
fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == name)
        .and_then(|(_, v)| urlencoding::decode(v).ok())
        .map(|v| v.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str, header: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri(uri);
        if let Some(key) = header {
            builder = builder.header("x-api-key", key);
        }
        builder.body(axum::body::Body::empty()).unwrap()
    }

    #[test]
    fn test_header_key_accepted() {
        let req = request("/api/list?type=idea", Some("secret"));
        assert!(has_valid_key(&req, "secret"));
    }

    #[test]
    fn test_header_key_rejected() {
        let req = request("/api/list", Some("wrong"));
        assert!(!has_valid_key(&req, "secret"));
    }

    #[test]
    fn test_query_key_accepted() {
        let req = request("/api/list?type=idea&key=secret", None);
        assert!(has_valid_key(&req, "secret"));
    }

    #[test]
    fn test_query_key_url_decoded() {
        let req = request("/api/list?key=se%20cret", None);
        assert!(has_valid_key(&req, "se cret"));
    }

    #[test]
    fn test_missing_key_rejected() {
        let req = request("/api/list?type=idea", None);
        assert!(!has_valid_key(&req, "secret"));
    }

    #[test]
    fn test_header_wins_over_query() {
        // A wrong header is not rescued by a correct query parameter
        let req = request("/api/list?key=secret", Some("wrong"));
        assert!(!has_valid_key(&req, "secret"));
    }
}
