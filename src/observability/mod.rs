//! Observability subsystem.
//!
//! Logging only: every request runs inside a span carrying its request ID
//! (see `http::request`), and events are emitted through `tracing`.

pub mod logging;

pub use logging::init_logging;
