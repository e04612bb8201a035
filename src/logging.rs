//! Logging setup
//!
//! The library only emits `tracing` events. Each client carries a span that
//! every request runs inside; callers can hand in their own span to route or
//! tag SDK logs, otherwise [`default_span`] is used.
//!
//! [`init`] is a convenience for binaries and tests that have no subscriber
//! of their own.

use tracing::Span;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log level (default `info`)
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Environment variable selecting the output format (`json` or text)
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Span used when the caller does not supply one
pub fn default_span() -> Span {
    tracing::info_span!("skalin", application = "skalin")
}

/// Install a global fmt subscriber.
///
/// Honors `LOG_LEVEL` and `LOG_FORMAT=json`. An invalid level falls back to
/// `info`. Does nothing if a global subscriber is already set.
pub fn init() {
    let level = std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var(ENV_LOG_FORMAT).is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true);

    // Err means a subscriber is already installed
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
