//! Injectable diagnostics for recoverable wire anomalies
//!
//! Parsing logic never logs directly. Warning-path observations are pushed
//! through the [`DiagnosticsSink`] trait instead, so embedders decide whether
//! anomalies go to `tracing`, to a test recorder, or nowhere. Sinks receive
//! a [`FormatWarning`] describing what disagreed and by how much; they have
//! no bearing on control flow or returned values.

/// A recoverable wire-format anomaly observed while reconciling a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatWarning<'a> {
    /// Operation that observed the anomaly
    pub at: &'a str,
    /// Declared payload size, from the wire length field
    pub declared: usize,
    /// Payload bytes actually present
    pub actual: usize,
    /// Short human-readable reason
    pub reason: &'a str,
}

/// Receiver for recoverable wire-format warnings
pub trait DiagnosticsSink {
    /// Called once per anomalous condition.
    fn format_warning(&self, warning: &FormatWarning<'_>);
}

/// Sink that discards all warnings
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn format_warning(&self, _warning: &FormatWarning<'_>) {}
}

/// Sink that forwards warnings to `tracing` as structured warn events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn format_warning(&self, warning: &FormatWarning<'_>) {
        tracing::warn!(
            at = warning.at,
            declared = warning.declared,
            actual = warning.actual,
            reason = warning.reason,
            "certificate format warning"
        );
    }
}
