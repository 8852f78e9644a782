//! Tri-colour indicator driver.
//!
//! Three discrete LEDs (green/yellow/red) on plain digital outputs.  At
//! most one is lit at a time; `Off` blanks all three.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives three GPIO outputs via hw_init.
//! On host/test: tracks state in-memory only.

use crate::app::ports::IndicatorState;
use crate::pins;

pub struct TriColorLed {
    current: IndicatorState,
}

impl TriColorLed {
    pub fn new() -> Self {
        Self {
            current: IndicatorState::Off,
        }
    }

    pub fn set(&mut self, state: IndicatorState) {
        let (green, yellow, red) = match state {
            IndicatorState::Fresh => (true, false, false),
            IndicatorState::Caution => (false, true, false),
            IndicatorState::Spoiled => (false, false, true),
            IndicatorState::Off => (false, false, false),
        };
        Self::write(pins::LED_GREEN_GPIO, green);
        Self::write(pins::LED_YELLOW_GPIO, yellow);
        Self::write(pins::LED_RED_GPIO, red);
        self.current = state;
    }

    pub fn off(&mut self) {
        self.set(IndicatorState::Off);
    }

    pub fn current(&self) -> IndicatorState {
        self.current
    }

    #[cfg(target_os = "espidf")]
    fn write(gpio: i32, level: bool) {
        crate::drivers::hw_init::gpio_set(gpio, level);
    }

    #[cfg(not(target_os = "espidf"))]
    fn write(_gpio: i32, _level: bool) {}
}

impl Default for TriColorLed {
    fn default() -> Self {
        Self::new()
    }
}
