//! Shared monitor state.
//!
//! One instance lives inside the mutual-exclusion region
//! ([`SharedRegion`](super::shared::SharedRegion)) and is read and written
//! by both tasks.  The control task owns the lifecycle fields (`running`,
//! `in_sequence`, `baseline`); the sampling task reads them and the
//! command path mutates `food` and `mode`.

use crate::config::{SamplingMode, SystemConfig};

use super::food::FoodType;

/// Monitor state shared between the control and sampling tasks.
#[derive(Debug, Clone, Copy)]
pub struct SystemState {
    /// Monitor on/off; toggled on each consumed activation edge.
    pub running: bool,
    /// True for the whole activation preamble (calibration + indicator
    /// demonstration sequence) so the sampler never races calibration or
    /// the demonstration's indicator writes.
    pub in_sequence: bool,
    /// Ambient gas baseline; strictly positive, recomputed each activation.
    pub baseline: f32,
    /// Selected food category; read-only to the classifier.
    pub food: FoodType,
    /// Sampling cadence policy.
    pub mode: SamplingMode,
}

impl SystemState {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            running: false,
            in_sequence: false,
            baseline: config.default_baseline,
            food: FoodType::default(),
            mode: config.sampling_mode,
        }
    }

    /// True while classification ticks are allowed to run.
    pub fn monitoring(&self) -> bool {
        self.running && !self.in_sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_idle() {
        let s = SystemState::new(&SystemConfig::default());
        assert!(!s.running);
        assert!(!s.in_sequence);
        assert!(!s.monitoring());
        assert_eq!(s.food, FoodType::Generic);
    }

    #[test]
    fn monitoring_requires_running_and_sequence_done() {
        let mut s = SystemState::new(&SystemConfig::default());
        s.running = true;
        s.in_sequence = true;
        assert!(!s.monitoring());
        s.in_sequence = false;
        assert!(s.monitoring());
    }
}
