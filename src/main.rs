//! Student status service.
//!
//! ```text
//! GET /student  → 200 {"student_status:": "hired"}
//! GET /         → 400 rejection
//! GET /{path}   → 404 invalid path
//! ```

use std::path::PathBuf;

use clap::Parser;

use student_status::config::{read_config, validate_config, ConfigError, ServiceConfig};
use student_status::lifecycle::startup;
use student_status::observability::init_logging;

#[derive(Parser)]
#[command(name = "student-status")]
#[command(version, about = "Student status HTTP service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:8000).
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the log level or filter directive.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Read the config file, apply overrides, then validate once, so an
    /// override can replace a bad value from the file.
    fn into_config(self) -> Result<ServiceConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "student-status starting"
    );

    if let Err(e) = startup::start(config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
