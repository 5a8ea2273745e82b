//! Student status HTTP service library.
//!
//! Three routes over axum: `GET /student` reports a fixed status, `GET /`
//! always rejects, and `GET /{path}` reports the path as invalid.

// Core subsystems
pub mod config;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
