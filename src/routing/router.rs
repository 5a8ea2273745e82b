//! Route table.

use axum::routing::get;
use axum::Router;

use crate::routing::handlers::{
    get_student, handle_invalid_path, handle_root, method_not_allowed, not_found,
};

/// Build the route table.
///
/// The static `/student` route takes precedence over the `/{path_name}`
/// capture, and `/` is matched on its own. Anything else (e.g. multi-segment
/// paths) lands in the fallback.
pub fn routes() -> Router {
    Router::new()
        .route("/student", get(get_student))
        .route("/", get(handle_root))
        .route("/{path_name}", get(handle_invalid_path))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
