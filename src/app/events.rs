//! Outbound application events.
//!
//! The control and sampling tasks emit these through the
//! [`ReportSink`](super::ports::ReportSink) port.  Adapters on the other
//! side decide what to do with them — log to serial, publish over MQTT as
//! a retained message, or fan out to both.

use serde::{Deserialize, Serialize};

use crate::app::classifier::{Measurement, Verdict};
use crate::app::food::FoodType;

/// Structured events emitted by the monitor core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// One classification tick's verdict and the measurement behind it.
    Report(ReportData),

    /// Calibration window opened.  Operators must keep the probe in
    /// ambient air, away from the product, for the stated duration.
    CalibrationStarted { duration_ms: u32 },

    /// Calibration finished; the new baseline is in effect.
    CalibrationFinished { baseline: f32 },

    /// The calibration window collected zero samples; the previous
    /// baseline remains in effect.
    CalibrationDegenerate { retained_baseline: f32 },

    /// Indicator demonstration done; the probe may now approach the
    /// product and periodic monitoring begins.
    MonitoringStarted,

    /// The monitor was switched off; the indicator is blanked.
    SystemOff,
}

/// A verdict record suitable for logging or transmission.  Also the MQTT
/// payload shape (serialized as JSON).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub verdict: Verdict,
    pub measurement: Measurement,
    pub baseline: f32,
    pub food: FoodType,
}
