use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging with environment-based filtering (`RUST_LOG`, default `info`).
///
/// Structured JSON when stdout is not a terminal, human-readable output otherwise.
pub fn init_logging() {
    match default_log_mode() {
        LogMode::Json => init_json_logging(),
        LogMode::Pretty => init_pretty_logging(),
    }
}

fn init_json_logging() {
    fmt()
        .with_env_filter(env_filter())
        .json()
        .flatten_event(true)
        .with_writer(io::stderr)
        .init();
}

fn init_pretty_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn default_log_mode() -> LogMode {
    if io::stdout().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Json,
    Pretty,
}
