//! Fan-out report sink.
//!
//! Combines two sinks into one, delivering every event to both — the
//! "console + telemetry" deployment.  Each leg already swallows its own
//! delivery failures, so the tee itself is infallible.

use crate::app::events::AppEvent;
use crate::app::ports::ReportSink;

/// Delivers each event to `a`, then `b`.
pub struct TeeSink<A, B> {
    pub a: A,
    pub b: B,
}

impl<A: ReportSink, B: ReportSink> TeeSink<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: ReportSink, B: ReportSink> ReportSink for TeeSink<A, B> {
    fn emit(&mut self, event: &AppEvent) {
        self.a.emit(event);
        self.b.emit(event);
    }
}
