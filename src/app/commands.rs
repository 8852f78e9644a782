//! Inbound commands to the monitor core.
//!
//! These represent actions requested by the outside world (boot-time
//! configuration, serial console, a future provisioning channel) that the
//! [`service`](super::service) layer applies to shared state.  Each takes
//! effect on the next classification tick.

use crate::config::SamplingMode;

use super::food::FoodType;

/// Commands that external collaborators can send into the monitor core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Select the monitored food category (adjusts threshold sensitivity).
    SelectFood(FoodType),

    /// Switch the sampling cadence policy.
    SetMode(SamplingMode),
}
