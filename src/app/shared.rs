//! Shared state and the mutual-exclusion region.
//!
//! Both tasks synchronize on one critical section that bundles the
//! [`SystemState`] with the indicator and report-sink handles.  Anything
//! that produces output — verdict computation, an indicator write, a
//! report emission — happens inside it, so a concurrent observer always
//! sees a consistent verdict/indicator pair.
//!
//! The lock is a blocking mutex over a `RefCell`: access is only possible
//! through a closure, which makes it structurally impossible to hold the
//! region across a sleep or an `.await`.  Sensor sampling is deliberately
//! *outside* the region (it mutates no shared state); concurrent hardware
//! access from the two tasks is serialized by the separate [`SensorCell`],
//! which is bus discipline rather than part of the state region.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::ports::{IndicatorPort, ReportSink, SensorPort};
use super::state::SystemState;

/// Everything the mutual-exclusion region protects.
pub struct Guarded<I, S> {
    pub state: SystemState,
    pub indicator: I,
    pub sink: S,
}

/// The mutual-exclusion region shared by the control and sampling tasks.
pub struct SharedRegion<I, S> {
    cell: Mutex<CriticalSectionRawMutex, RefCell<Guarded<I, S>>>,
}

impl<I: IndicatorPort, S: ReportSink> SharedRegion<I, S> {
    pub fn new(state: SystemState, indicator: I, sink: S) -> Self {
        Self {
            cell: Mutex::new(RefCell::new(Guarded {
                state,
                indicator,
                sink,
            })),
        }
    }

    /// Enter the critical section.  The closure must stay O(1): shared
    /// state reads/writes, one indicator write, one report emission.
    pub fn with<R>(&self, f: impl FnOnce(&mut Guarded<I, S>) -> R) -> R {
        self.cell.lock(|c| f(&mut c.borrow_mut()))
    }

    /// Snapshot of the shared state (one brief lock).
    pub fn state(&self) -> SystemState {
        self.with(|g| g.state)
    }

    /// True while classification ticks are allowed to run.
    pub fn monitoring(&self) -> bool {
        self.with(|g| g.state.monitoring())
    }
}

/// Serializes raw sensor access between the calibration loop (control
/// task) and the classification loop (sampling task).  Held only for the
/// duration of one hardware read, never nested with the state region.
pub struct SensorCell<SENS> {
    cell: Mutex<CriticalSectionRawMutex, RefCell<SENS>>,
}

impl<SENS: SensorPort> SensorCell<SENS> {
    pub fn new(sensors: SENS) -> Self {
        Self {
            cell: Mutex::new(RefCell::new(sensors)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut SENS) -> R) -> R {
        self.cell.lock(|c| f(&mut c.borrow_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::AppEvent;
    use crate::app::ports::IndicatorState;
    use crate::config::SystemConfig;

    struct NullIndicator;
    impl IndicatorPort for NullIndicator {
        fn set_state(&mut self, _state: IndicatorState) {}
    }

    struct NullSink;
    impl ReportSink for NullSink {
        fn emit(&mut self, _event: &AppEvent) {}
    }

    #[test]
    fn state_snapshot_reflects_mutation() {
        let region = SharedRegion::new(
            SystemState::new(&SystemConfig::default()),
            NullIndicator,
            NullSink,
        );
        assert!(!region.state().running);
        region.with(|g| g.state.running = true);
        assert!(region.state().running);
        assert!(region.monitoring());
    }

    #[test]
    fn region_is_reentrant_per_call_not_nested() {
        // Each `with` is a complete critical section; sequential calls
        // from one thread must not deadlock.
        let region = SharedRegion::new(
            SystemState::new(&SystemConfig::default()),
            NullIndicator,
            NullSink,
        );
        for _ in 0..100 {
            region.with(|g| g.state.baseline += 1.0);
        }
        assert_eq!(region.state().baseline, 101.0);
    }
}
