use retention_os::config::LoggingConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// HTTP-stack modules kept at `warn` so request logs stay readable.
const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "h2", "tower_http", "axum"];

fn build_filter(level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives = String::from(level);
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{}=warn", module));
    }
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Output goes to stderr so `analyze --json`
/// keeps stdout clean.
pub fn init_logging(config: &LoggingConfig) {
    let filter = build_filter(&config.level);
    let subscriber = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_writer(std::io::stderr);
        let _ = subscriber.with(fmt_layer).try_init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr);
        let _ = subscriber.with(fmt_layer).try_init();
    }

    tracing::debug!(level = %config.level, format = %config.format, "logging initialized");
}
