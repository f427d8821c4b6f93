use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;

/// Installs the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init_tracing(cfg: &AppConfig) {
    let rust_log = std::env::var("RUST_LOG").ok();
    fmt()
        .with_env_filter(build_filter(rust_log.as_deref(), &cfg.log_level))
        .with_target(true)
        .init();
}

/// An unparsable directive string falls back to `info`.
fn build_filter(rust_log: Option<&str>, log_level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(log_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
