//! Logging to the browser console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

const DEFAULT_FILTER: &str = "error,techlog_ui=debug";

/// Initialize logging. The filter can be replaced at build time with
/// `LOG_FILTER`; a filter that doesn't parse is reported and ignored.
pub fn init_logging() {
    let build_filter = option_env!("LOG_FILTER");
    let (env_filter, rejected) = match build_filter.map(EnvFilter::try_new) {
        Some(Ok(filter)) => (filter, None),
        Some(Err(e)) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
        None => (EnvFilter::new(DEFAULT_FILTER), None),
    };

    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time() // no clock in wasm32-unknown-unknown
        .with_target(false)
        .with_line_number(true)
        .with_level(false)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .init();

    if let Some(e) = rejected {
        tracing::warn!("LOG_FILTER {build_filter:?} is invalid, using {DEFAULT_FILTER}: {e}");
    }
}
