use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Environment variable that overrides the `--log-filter` flag.
pub const LOG_ENV: &str = "PRERENDER_LOG";

/// Logs an error with its whole context chain.
pub fn log_error(e: impl Into<anyhow::Error>) {
    let e: anyhow::Error = e.into();
    tracing::error!("{e:#}");
}

/// Picks `PRERENDER_LOG` when it is set and parses, `default_filter`
/// otherwise.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// One compact line per event on stderr, so stdout stays free for piping
/// the list of written pages.
pub fn get_subscriber(env_filter: EnvFilter) -> impl Subscriber + Sync + Send {
    let stderr = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false)
        .without_time();
    Registry::default().with(env_filter).with(stderr)
}

/// Installs the subscriber and routes `log` records through it. Call once.
pub fn init_subscriber(subscriber: impl Subscriber + Sync + Send) {
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_applies_without_override() {
        // SAFETY: no other test in this crate touches PRERENDER_LOG.
        unsafe { std::env::remove_var(LOG_ENV) };
        let filter = env_filter("techlog_prerender=debug");
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::DEBUG)
        );
    }
}
