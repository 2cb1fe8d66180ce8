//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so that stdout carries only the report.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the log filter.
///
/// `env_directives` is the raw `RUST_LOG` value. `debug` raises the default
/// level to `DEBUG` even when `RUST_LOG` is set; target-specific directives
/// from the environment still apply.
pub fn log_filter(debug: bool, env_directives: Option<&str>) -> EnvFilter {
    let default_level = if debug { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(env_directives.unwrap_or_default());

    if debug {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

/// Install the global stderr subscriber.
pub fn init(debug: bool) {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    fmt()
        .with_env_filter(log_filter(debug, env_directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(true, None).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_env_directives_respected_without_debug() {
        assert_eq!(
            log_filter(false, Some("warn")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn test_debug_flag_overrides_env_level() {
        assert_eq!(
            log_filter(true, Some("warn")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
