//! Subscriber setup.
//!
//! Filter precedence: `--log-level`, then `RUST_LOG`, then the config file's
//! `logging.level`.

use haptics_config::schema::LogLevel;
use tracing_subscriber::EnvFilter;

const FALLBACK_DIRECTIVE: &str = "haptics=info";

/// Pick the filter directive to use. Blank values count as unset.
pub fn resolve_directive(cli: Option<&str>, env: Option<&str>, config: LogLevel) -> String {
    let non_blank = |s: &&str| !s.trim().is_empty();
    cli.filter(non_blank)
        .or_else(|| env.filter(non_blank))
        .unwrap_or_else(|| config.directive())
        .to_string()
}

/// Install the global `fmt` subscriber.
pub fn init(cli: Option<&str>, config: LogLevel) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = resolve_directive(cli, env.as_deref(), config);

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {directive:?} ({e}), using {FALLBACK_DIRECTIVE}");
        EnvFilter::new(FALLBACK_DIRECTIVE)
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_wins_over_everything() {
        assert_eq!(
            resolve_directive(Some("debug"), Some("warn"), LogLevel::Error),
            "debug"
        );
    }

    #[test]
    fn env_wins_over_config() {
        assert_eq!(
            resolve_directive(None, Some("haptics_ingress=trace"), LogLevel::Warn),
            "haptics_ingress=trace"
        );
    }

    #[test]
    fn config_level_is_the_fallback() {
        assert_eq!(resolve_directive(None, None, LogLevel::Debug), "haptics=debug");
        assert_eq!(
            resolve_directive(None, None, LogLevel::default()),
            FALLBACK_DIRECTIVE
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        assert_eq!(
            resolve_directive(Some(""), Some("  "), LogLevel::Info),
            "haptics=info"
        );
    }
}
