// file: src/logging/logger.rs
// version: 1.0.0
// guid: 92a7c4e0-5f1b-4d86-b3e9-1c6d0a8f7e52

//! Logger initialization and configuration
//!
//! Logs always go to stderr. Stdout carries the JSON result consumed by the
//! automation framework and must stay clean.

use crate::error::{AgentError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for the given verbosity flags. `quiet` wins over `verbose`.
pub fn level_for(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::new(level_for(verbose, quiet));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| AgentError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Run `f` inside an `operation` span
pub fn with_operation_span<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let span = tracing::info_span!("operation", name = operation);
    let _enter = span.enter();
    f()
}
