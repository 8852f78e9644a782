//! Monitor service — synchronous domain operations.
//!
//! Every operation here is one complete pass through the mutual-exclusion
//! region: read shared state, produce output (indicator + report), leave.
//! The async task loops in [`tasks`](crate::tasks) do the sampling and the
//! sleeping *between* these calls, so no lock is ever held across a wait.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────────┐ ──▶ ReportSink
//!                 │    classification_tick        │
//!                 │  classify · indicate · emit   │
//!                 └──────────────────────────────┘
//!                               ▼ IndicatorPort
//! ```

use log::info;

use crate::config::SystemConfig;

use super::classifier::{classify, Measurement, Verdict};
use super::commands::AppCommand;
use super::events::{AppEvent, ReportData};
use super::ports::{IndicatorPort, IndicatorState, ReportSink};
use super::shared::SharedRegion;

/// Consume one activation edge: toggle `running` and return the new value.
/// On a rising edge the activation preamble (calibration + indicator
/// sequence) is about to run, so `in_sequence` is raised in the same
/// critical section — the sampler must not start classifying against a
/// stale baseline.
pub fn toggle_running<I: IndicatorPort, S: ReportSink>(shared: &SharedRegion<I, S>) -> bool {
    shared.with(|g| {
        g.state.running = !g.state.running;
        if g.state.running {
            g.state.in_sequence = true;
        }
        g.state.running
    })
}

/// Announce the calibration window to the operator.
pub fn announce_calibration<I: IndicatorPort, S: ReportSink>(
    shared: &SharedRegion<I, S>,
    config: &SystemConfig,
) {
    let duration_ms = config.calibration_duration_ms;
    shared.with(|g| g.sink.emit(&AppEvent::CalibrationStarted { duration_ms }));
}

/// Install a freshly computed baseline, or retain the previous one when
/// the window was degenerate (zero samples).
pub fn apply_baseline<I: IndicatorPort, S: ReportSink>(
    shared: &SharedRegion<I, S>,
    baseline: Option<f32>,
) {
    shared.with(|g| match baseline {
        Some(b) => {
            g.state.baseline = b;
            g.sink.emit(&AppEvent::CalibrationFinished { baseline: b });
        }
        None => {
            g.sink.emit(&AppEvent::CalibrationDegenerate {
                retained_baseline: g.state.baseline,
            });
        }
    });
}

/// End the activation preamble: blank the indicator, clear `in_sequence`,
/// and tell the operator that monitoring begins.
pub fn finish_sequence<I: IndicatorPort, S: ReportSink>(shared: &SharedRegion<I, S>) {
    shared.with(|g| {
        g.indicator.set_state(IndicatorState::Off);
        g.state.in_sequence = false;
        g.sink.emit(&AppEvent::MonitoringStarted);
    });
}

/// Switch the monitor off: blank the indicator and notify the sink.
pub fn deactivate<I: IndicatorPort, S: ReportSink>(shared: &SharedRegion<I, S>) {
    shared.with(|g| {
        g.indicator.set_state(IndicatorState::Off);
        g.sink.emit(&AppEvent::SystemOff);
    });
}

/// Run one classification tick over an already-taken measurement.
///
/// The caller reads the sensors *before* entering here; everything inside
/// is a single critical section, so the verdict, the indicator write, and
/// the report emission are atomic with respect to other ticks.
pub fn classification_tick<I: IndicatorPort, S: ReportSink>(
    shared: &SharedRegion<I, S>,
    config: &SystemConfig,
    measurement: Measurement,
) -> Verdict {
    shared.with(|g| {
        let verdict = classify(
            &measurement,
            g.state.baseline,
            g.state.food.factor(),
            config,
        );
        g.indicator.set_state(verdict.into());
        g.sink.emit(&AppEvent::Report(ReportData {
            verdict,
            measurement,
            baseline: g.state.baseline,
            food: g.state.food,
        }));
        verdict
    })
}

/// Apply an external command to shared state.  Takes effect on the next
/// classification tick.
pub fn handle_command<I: IndicatorPort, S: ReportSink>(
    shared: &SharedRegion<I, S>,
    cmd: AppCommand,
) {
    match cmd {
        AppCommand::SelectFood(food) => {
            shared.with(|g| g.state.food = food);
            info!("Food profile selected: {:?}", food);
        }
        AppCommand::SetMode(mode) => {
            shared.with(|g| g.state.mode = mode);
            info!("Sampling mode set: {:?}", mode);
        }
    }
}
