use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const COMPACT_FILTER: &str = "info,tower_http=info,axum=info";
// business events from the service crate are debug-level
const JSON_FILTER: &str = "info,service=debug";

/// `RUST_LOG` wins; otherwise the given directive.
fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Human-readable single-line output on stdout.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(filter_or(COMPACT_FILTER))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event, for log shippers.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(filter_or(JSON_FILTER))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the output format from `LOG_FORMAT` (`json` or anything else for compact).
pub fn init_logging_from_env() {
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}
