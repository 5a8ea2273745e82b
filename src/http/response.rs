//! Response-side helpers.
//!
//! # Responsibilities
//! - Log the outcome of each request inside its trace span
//!
//! # Design Decisions
//! - Client errors (4xx) are expected traffic and logged at debug
//! - Anything else non-successful is logged at warn

use std::time::Duration;

use axum::http::Response;
use tower_http::trace::OnResponse;
use tracing::Span;

/// `TraceLayer` hook recording the final status and latency of a response.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogResponse;

impl<B> OnResponse<B> for LogResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        let status = response.status();
        let latency_ms = latency.as_millis() as u64;

        if status.is_success() || status.is_client_error() {
            tracing::debug!(status = %status, latency_ms, "Request completed");
        } else {
            tracing::warn!(status = %status, latency_ms, "Request completed with unexpected status");
        }
    }
}
