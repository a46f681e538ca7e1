//! Logging utilities for the forum analyzer.
//!
//! Provides structured JSON or human-readable logging on top of
//! `tracing-subscriber`, plus trace ids for batch runs.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Build the EnvFilter for `log_level`.
fn build_filter(log_level: &str) -> EnvFilter {
    // RUST_LOG wins when set
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Initialize logging with the given configuration.
///
/// # Arguments
///
/// * `log_level` - Base log level (trace, debug, info, warn, error)
/// * `log_format` - Output format: "json" for structured JSON, "pretty" for human-readable
///
/// Logs go to stderr so that stdout stays free for pipeline output.
pub fn init_logging(log_level: &str, log_format: &str) {
    let filter = build_filter(log_level);

    let subscriber = tracing_subscriber::registry().with(filter);

    if log_format == "json" {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        let _ = subscriber.with(fmt_layer).try_init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(true)
            .with_file(false)
            .with_line_number(false);
        let _ = subscriber.with(fmt_layer).try_init();
    }

    tracing::info!(
        log_level = %log_level,
        log_format = %log_format,
        "Logging initialized"
    );
}

/// Generate a new trace ID for a batch run.
pub fn generate_trace_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Create a tracing span for a batch analysis run.
///
/// # Example
///
/// ```ignore
/// let span = batch_span!(trace_id, posts = posts.len());
/// let _enter = span.enter();
/// ```
#[macro_export]
macro_rules! batch_span {
    ($trace_id:expr) => {
        tracing::info_span!("analysis_batch", trace_id = %$trace_id)
    };
    ($trace_id:expr, $($field:tt)*) => {
        tracing::info_span!("analysis_batch", trace_id = %$trace_id, $($field)*)
    };
}
