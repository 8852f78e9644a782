//! Log-based report sink adapter.
//!
//! Implements [`ReportSink`] by writing structured application events to
//! the logger (which goes to UART / USB-CDC in production).  The MQTT
//! adapter implements the same trait for the telemetry variants.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::ReportSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogReportSink;

impl LogReportSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogReportSink {
    fn default() -> Self {
        Self::new()
    }
}

fn fmt_opt(v: Option<f32>) -> heapless::String<16> {
    use core::fmt::Write;
    let mut s = heapless::String::new();
    match v {
        Some(x) => {
            let _ = write!(s, "{:.1}", x);
        }
        None => {
            let _ = s.push_str("Err");
        }
    }
    s
}

impl ReportSink for LogReportSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Report(r) => {
                info!(
                    "REPORT | {:?} | gas={} (baseline={:.0}) | T={}\u{00b0}C | RH={}% | food={:?}",
                    r.verdict,
                    r.measurement.gas_raw,
                    r.baseline,
                    fmt_opt(r.measurement.temperature_c),
                    fmt_opt(r.measurement.humidity_pct),
                    r.food,
                );
            }
            AppEvent::CalibrationStarted { duration_ms } => {
                info!(
                    "CALIB | started ({} ms) — keep the probe in ambient air, away from the product",
                    duration_ms
                );
            }
            AppEvent::CalibrationFinished { baseline } => {
                info!("CALIB | done, baseline={:.0}", baseline);
            }
            AppEvent::CalibrationDegenerate { retained_baseline } => {
                info!(
                    "CALIB | no samples collected, retaining baseline={:.0}",
                    retained_baseline
                );
            }
            AppEvent::MonitoringStarted => {
                info!("START | approach the probe to the product — monitoring begins");
            }
            AppEvent::SystemOff => {
                info!("STOP | monitor off, indicator blanked");
            }
        }
    }
}
