//! System configuration parameters
//!
//! All tunable parameters for the FoodGuard monitor.  Defaults reproduce the
//! prototype constants; integration tests shrink the timing fields to keep
//! test runs fast.

use serde::{Deserialize, Serialize};

/// Sampling cadence policy for the classification task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SamplingMode {
    /// Fixed-period polling while the monitor is running.
    #[default]
    Continuous,
    /// Exactly one classification per activation, then the sampling task
    /// suspends until the next activation edge (energy-optimized mode).
    SingleShot,
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Calibration ---
    /// Total calibration window (milliseconds).
    pub calibration_duration_ms: u32,
    /// Interval between calibration samples (milliseconds).
    pub calibration_sample_interval_ms: u32,
    /// Baseline used before the first calibration completes.
    pub default_baseline: f32,

    // --- Classification thresholds ---
    /// Gas ratio (reading / baseline) that triggers Caution.
    pub ratio_yellow: f32,
    /// Gas ratio that triggers Spoiled.
    pub ratio_red: f32,
    /// Gas delta (reading - baseline, raw ADC units) that triggers Caution.
    pub delta_yellow: i32,
    /// Gas delta that triggers Spoiled.
    pub delta_red: i32,
    /// Fraction of an effective ratio threshold at which environmental risk
    /// escalates the verdict.
    pub escalation_margin: f32,
    /// Ambient temperature (°C) at or above which spoilage risk rises.
    pub temp_risk_c: f32,
    /// Relative humidity (%) at or above which spoilage risk rises.
    pub humidity_risk_pct: f32,

    // --- Timing ---
    /// Classification period while monitoring (milliseconds).
    pub sample_interval_ms: u32,
    /// Poll interval of the sampling task while the monitor is off
    /// (milliseconds, Continuous mode only).
    pub idle_poll_interval_ms: u32,
    /// Duration of each indicator demonstration step (milliseconds).
    pub sequence_step_ms: u32,

    // --- Cadence ---
    /// Sampling cadence policy.
    pub sampling_mode: SamplingMode,

    // --- Telemetry ---
    /// MQTT topic for retained verdict reports.
    pub report_topic: heapless::String<64>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Calibration: 5 s window, one sample every 100 ms
            calibration_duration_ms: 5_000,
            calibration_sample_interval_ms: 100,
            default_baseline: 1.0,

            // Thresholds
            ratio_yellow: 1.20,
            ratio_red: 1.50,
            delta_yellow: 150,
            delta_red: 400,
            escalation_margin: 0.95,
            temp_risk_c: 8.0,
            humidity_risk_pct: 85.0,

            // Timing
            sample_interval_ms: 2_000,
            idle_poll_interval_ms: 200,
            sequence_step_ms: 2_000,

            sampling_mode: SamplingMode::Continuous,

            report_topic: heapless::String::try_from("food/monitor")
                .unwrap_or_default(),
        }
    }
}
