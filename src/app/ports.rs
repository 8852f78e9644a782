//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ domain core
//! ```
//!
//! Driven adapters (sensors, the LED indicator, report sinks) implement
//! these traits.  The tasks and [`service`](super::service) functions
//! consume them via generics, so the domain core never touches hardware
//! directly.

use crate::app::classifier::{Measurement, Verdict};
use crate::app::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor data.
///
/// Implementations must never block the caller beyond the physical
/// conversion time and must map invalid climate reads to `None` fields
/// rather than failing the whole measurement.
pub trait SensorPort {
    /// Read gas + climate and return a unified measurement.
    fn read_measurement(&mut self) -> Measurement;

    /// Fast gas-only read for the calibration sampling loop.
    fn read_gas_raw(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Requested state of the tri-colour indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    /// Green only.
    Fresh,
    /// Yellow only.
    Caution,
    /// Red only.
    Spoiled,
    /// All LEDs dark.
    Off,
}

impl From<Verdict> for IndicatorState {
    fn from(v: Verdict) -> Self {
        match v {
            Verdict::Fresh => Self::Fresh,
            Verdict::Caution => Self::Caution,
            Verdict::Spoiled => Self::Spoiled,
        }
    }
}

/// Write-side port: the domain calls this to drive the indicator.
/// At most one LED is lit at a time.
pub trait IndicatorPort {
    fn set_state(&mut self, state: IndicatorState);
}

// ───────────────────────────────────────────────────────────────
// Report sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.  Adapters
/// decide where they go (serial log, retained MQTT publish, both).
///
/// `emit` is called from inside the mutual-exclusion region, so
/// implementations must be non-blocking and must swallow delivery
/// failures: a report that cannot be delivered this tick is dropped, not
/// buffered — the next tick carries fresh data anyway.
pub trait ReportSink {
    fn emit(&mut self, event: &AppEvent);
}

/// An optional sink leg: `None` drops everything.  Lets a deployment
/// attach telemetry only when the transport actually came up.
impl<S: ReportSink> ReportSink for Option<S> {
    fn emit(&mut self, event: &AppEvent) {
        if let Some(sink) = self {
            sink.emit(event);
        }
    }
}
