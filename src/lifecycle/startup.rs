//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener from validated configuration
//! - Hook OS signals to the shutdown coordinator
//! - Run the HTTP server until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Config is validated before this point; binding happens last

use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::spawn_signal_handler;

/// Bind the listener and serve until a termination signal arrives.
pub async fn start(config: ServiceConfig) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let signals = spawn_signal_handler(shutdown);

    let result = HttpServer::new(config).run(listener, server_shutdown).await;
    signals.abort();
    result
}
