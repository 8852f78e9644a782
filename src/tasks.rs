//! The two perpetual task loops and their thread spawns.
//!
//! Mirrors the FreeRTOS layout of the prototype hardware: the **control
//! task** (APP_CPU) owns activation handling, calibration, and the
//! indicator demonstration; the **sampling task** (PRO_CPU) owns periodic
//! classification.  Each task is one async loop driven by
//! `futures_lite::future::block_on` inside a core-pinned thread, sleeping
//! on `async-io-mini` reactor timers and waking on the collapsing signals
//! in [`signals`](crate::signals).
//!
//! ```text
//!  ┌───────────────────────────┐      ┌────────────────────────────┐
//!  │ control task (core 1)     │      │ sampling task (core 0)     │
//!  │ ACTIVATION.wait()         │      │ poll / SAMPLER_WAKE.wait() │
//!  │ toggle → calibrate → demo │─────▶│ read → classify → report   │
//!  └───────────────────────────┘ wake └────────────────────────────┘
//! ```
//!
//! Neither loop ever terminates, and neither holds the shared region
//! across a sleep: every lock scope is one O(1) service call.

use core::time::Duration;

use std::sync::Arc;
use std::thread::JoinHandle;

use async_io_mini::Timer;
use log::info;

use crate::app::calibration::CalibrationAccumulator;
use crate::app::ports::{IndicatorPort, IndicatorState, ReportSink, SensorPort};
use crate::app::service;
use crate::app::shared::{SensorCell, SharedRegion};
use crate::config::{SamplingMode, SystemConfig};
use crate::drivers::task_pin::{self, Core};
use crate::signals::{ACTIVATION, SAMPLER_WAKE};

/// Thread priority for both tasks (FreeRTOS scale; idle is 0).
const TASK_PRIORITY: u8 = 5;
/// Stack per task in KiB.
const TASK_STACK_KB: usize = 8;

// ───────────────────────────────────────────────────────────────
// Control task
// ───────────────────────────────────────────────────────────────

/// Blocks on the activation signal forever; each consumed edge toggles
/// the monitor.  A rising edge runs the activation preamble; a falling
/// edge blanks the indicator immediately.
pub async fn control_task<SENS, I, S>(
    shared: Arc<SharedRegion<I, S>>,
    sensors: Arc<SensorCell<SENS>>,
    config: SystemConfig,
) -> !
where
    SENS: SensorPort,
    I: IndicatorPort,
    S: ReportSink,
{
    loop {
        ACTIVATION.wait().await;
        if service::toggle_running(&shared) {
            info!("Activation edge: monitor ON");
            run_preamble(&shared, &sensors, &config).await;
        } else {
            info!("Activation edge: monitor OFF");
            service::deactivate(&shared);
        }
    }
}

/// The activation preamble: ambient calibration, then the fixed
/// green→yellow→red demonstration, then hand over to the sampler.
async fn run_preamble<SENS, I, S>(
    shared: &SharedRegion<I, S>,
    sensors: &SensorCell<SENS>,
    config: &SystemConfig,
) where
    SENS: SensorPort,
    I: IndicatorPort,
    S: ReportSink,
{
    service::announce_calibration(shared, config);

    // Sample the gas sensor outside any lock; only the status notices
    // above/below touch the shared region.
    let interval = config.calibration_sample_interval_ms;
    let steps = config
        .calibration_duration_ms
        .checked_div(interval)
        .unwrap_or(0);
    let mut acc = CalibrationAccumulator::new();
    for _ in 0..steps {
        let raw = sensors.with(|s| s.read_gas_raw());
        acc.record(raw);
        Timer::after(Duration::from_millis(u64::from(interval))).await;
    }
    service::apply_baseline(shared, acc.baseline());

    // Fixed demonstration sequence — declarative operator feedback, not a
    // live verdict.  Lock, write one LED, unlock, sleep.
    let step = Duration::from_millis(u64::from(config.sequence_step_ms));
    for state in [
        IndicatorState::Fresh,
        IndicatorState::Caution,
        IndicatorState::Spoiled,
    ] {
        shared.with(|g| g.indicator.set_state(state));
        Timer::after(step).await;
    }
    service::finish_sequence(shared);

    // Single-shot mode parks the sampler on this signal; in continuous
    // mode a pending wake is simply never consumed (collapsing signal).
    SAMPLER_WAKE.signal(());
}

// ───────────────────────────────────────────────────────────────
// Sampling task
// ───────────────────────────────────────────────────────────────

/// Periodic classification loop.
///
/// Continuous mode reproduces the fixed-cadence prototype: a short idle
/// poll of the running flag while off, one classification per sampling
/// period while monitoring.  Single-shot mode parks on the wake signal,
/// classifies exactly once per activation, clears `running`, and parks
/// again — the verdict stays on the indicator until the next press.
pub async fn sampling_task<SENS, I, S>(
    shared: Arc<SharedRegion<I, S>>,
    sensors: Arc<SensorCell<SENS>>,
    config: SystemConfig,
) -> !
where
    SENS: SensorPort,
    I: IndicatorPort,
    S: ReportSink,
{
    let idle = Duration::from_millis(u64::from(config.idle_poll_interval_ms));
    let period = Duration::from_millis(u64::from(config.sample_interval_ms));

    loop {
        let state = shared.state();
        match state.mode {
            SamplingMode::Continuous => {
                if !state.monitoring() {
                    Timer::after(idle).await;
                    continue;
                }
                let measurement = sensors.with(|s| s.read_measurement());
                service::classification_tick(&shared, &config, measurement);
                Timer::after(period).await;
            }
            SamplingMode::SingleShot => {
                SAMPLER_WAKE.wait().await;
                if !shared.monitoring() {
                    continue;
                }
                let measurement = sensors.with(|s| s.read_measurement());
                service::classification_tick(&shared, &config, measurement);
                shared.with(|g| g.state.running = false);
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Thread spawns
// ───────────────────────────────────────────────────────────────

/// Spawn both task loops on their cores.  Mirrors the prototype's task
/// pinning: control on APP_CPU (core 1), sampling on PRO_CPU (core 0).
pub fn spawn_tasks<SENS, I, S>(
    shared: Arc<SharedRegion<I, S>>,
    sensors: Arc<SensorCell<SENS>>,
    config: &SystemConfig,
) -> (JoinHandle<()>, JoinHandle<()>)
where
    SENS: SensorPort + Send + 'static,
    I: IndicatorPort + Send + 'static,
    S: ReportSink + Send + 'static,
{
    let control = {
        let shared = shared.clone();
        let sensors = sensors.clone();
        let config = config.clone();
        task_pin::spawn_on_core(Core::App, TASK_PRIORITY, TASK_STACK_KB, "control\0", move || {
            futures_lite::future::block_on(control_task(shared, sensors, config))
        })
    };

    let sampler = {
        let config = config.clone();
        task_pin::spawn_on_core(Core::Pro, TASK_PRIORITY, TASK_STACK_KB, "sampler\0", move || {
            futures_lite::future::block_on(sampling_task(shared, sensors, config))
        })
    };

    (control, sampler)
}
