// grubdash/src/telemetry.rs

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

/// Used when `RUST_LOG` is unset, empty or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
  rust_log
    .filter(|raw| !raw.trim().is_empty())
    .and_then(|raw| EnvFilter::try_new(raw).ok())
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber: `RUST_LOG` filtering, span-close events,
/// pretty or JSON output.
pub fn init_tracing(format: LogFormat) {
  let filter = env_filter(std::env::var("RUST_LOG").ok().as_deref());
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE);
  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.init(),
  }
}
