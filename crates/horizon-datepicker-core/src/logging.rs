//! Logging facilities for Horizon Datepicker.
//!
//! Horizon Datepicker uses the `tracing` crate for instrumentation. To see
//! logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_datepicker=trace")
//!         .init();
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_datepicker_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_datepicker_core::signal";
    /// Selection model target.
    pub const SELECTION: &str = "horizon_datepicker::selection";
    /// Date adapter target.
    pub const ADAPTER: &str = "horizon_datepicker::adapter";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for grouping the events of a multi-step selection update.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new span for the named operation.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_datepicker::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_perf_span_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _span = PerfSpan::new("add");
            tracing::debug!(target: targets::SELECTION, value = 1, "event inside span");
        });
    }
}
