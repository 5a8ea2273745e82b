//! Route handlers.
//!
//! All handlers are stateless; the response depends only on the matched
//! route and the request path.

use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::routing::path::{single_segment, trailing_slash_redirect};

/// Status reported by `GET /student`.
pub const STUDENT_STATUS: &str = "hired";

/// Rejection message for `GET /`.
///
/// The wording talks about non-GET requests even though the root route only
/// ever sees GET. Clients match on this exact text, so it stays as is.
pub const ROOT_REJECTION: &str = "Only GET requests to the path '/student' are allowed.";

/// Body of `GET /student`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentStatus {
    /// The wire key carries a trailing colon.
    #[serde(rename = "student_status:")]
    pub student_status: &'static str,
}

/// `GET /student`
pub async fn get_student() -> Json<StudentStatus> {
    Json(StudentStatus {
        student_status: STUDENT_STATUS,
    })
}

/// `GET /`
pub async fn handle_root() -> ApiError {
    ApiError::bad_request(ROOT_REJECTION)
}

/// Detail for requests that match no route at all.
pub const NOT_FOUND: &str = "Not Found";

/// `GET /{path_name}`
///
/// The segment is decoded from the raw URI, so invalid UTF-8 becomes U+FFFD
/// instead of an extractor rejection. An encoded slash (`/a%2Fb`) decodes to
/// a multi-segment path and is treated as unmatched.
pub async fn handle_invalid_path(uri: Uri) -> ApiError {
    match single_segment(&uri) {
        Some(path_name) => {
            tracing::debug!(path = %path_name, "Invalid path requested");
            ApiError::not_found(format!("The path '{}' is not valid.", path_name))
        }
        None => ApiError::not_found(NOT_FOUND),
    }
}

/// No route matched the request path.
///
/// A path that would match without its trailing slash is redirected there
/// with 307, keeping the method and body.
pub async fn not_found(headers: HeaderMap, uri: Uri) -> Response {
    match trailing_slash_redirect(&uri, &headers) {
        Some(location) => {
            tracing::debug!(from = %uri.path(), to = %location, "Redirecting trailing slash");
            (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response()
        }
        None => ApiError::not_found(NOT_FOUND).into_response(),
    }
}

/// The path matched but the method did not.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn student_is_hired() {
        let Json(body) = get_student().await;
        assert_eq!(body.student_status, "hired");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"student_status:":"hired"}"#
        );
    }

    #[tokio::test]
    async fn root_always_rejects() {
        assert_eq!(handle_root().await, ApiError::BadRequest(ROOT_REJECTION.into()));
    }

    #[tokio::test]
    async fn invalid_path_interpolates_segment() {
        let err = handle_invalid_path(Uri::from_static("/foo")).await;
        assert_eq!(err, ApiError::NotFound("The path 'foo' is not valid.".into()));
    }

    #[tokio::test]
    async fn invalid_path_keeps_segment_verbatim() {
        let err = handle_invalid_path(Uri::from_static("/it's%20%25%7Bweird%7D")).await;
        assert_eq!(err.to_string(), "The path 'it's %{weird}' is not valid.");
    }

    #[tokio::test]
    async fn invalid_utf8_segment_is_replaced() {
        let err = handle_invalid_path(Uri::from_static("/%FF")).await;
        assert_eq!(err, ApiError::NotFound("The path '\u{FFFD}' is not valid.".into()));
    }

    #[tokio::test]
    async fn encoded_slash_is_unmatched() {
        let err = handle_invalid_path(Uri::from_static("/a%2Fb")).await;
        assert_eq!(err, ApiError::NotFound(NOT_FOUND.into()));
    }

    #[tokio::test]
    async fn fallback_redirects_trailing_slash() {
        let response = not_found(HeaderMap::new(), Uri::from_static("/student/")).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/student");

        let response = not_found(HeaderMap::new(), Uri::from_static("/a/b")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
