//! Request routing subsystem.
//!
//! # Routes
//! ```text
//! GET /student       → 200 {"student_status:": "hired"}
//! GET /              → 400 {"detail": "Only GET requests to the path '/student' are allowed."}
//! GET /{path_name}   → 404 {"detail": "The path '<path_name>' is not valid."}
//! GET /{path_name}/  → 307 to /{path_name}
//! anything else      → 404 {"detail": "Not Found"}
//! wrong method       → 405 {"detail": "Method Not Allowed"}
//! ```
//!
//! Path and method matching is done by axum; this module only declares the
//! table and the handlers.

pub mod handlers;
pub mod path;
pub mod router;

pub use router::routes;
