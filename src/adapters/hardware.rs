//! Hardware adapters — bridge real peripherals to the domain port traits.
//!
//! These are the only structs in the system that touch actual hardware.
//! On non-espidf targets, the underlying drivers use cfg-gated simulation
//! stubs.
//!
//! The sensor and indicator sides are deliberately *separate* adapters:
//! the indicator lives inside the mutual-exclusion region with the shared
//! state, while the sensors are sampled outside it.

use crate::app::classifier::Measurement;
use crate::app::ports::{IndicatorPort, IndicatorState, SensorPort};
use crate::drivers::indicator::TriColorLed;
use crate::sensors::SensorHub;

// ── SensorPort adapter ────────────────────────────────────────

/// Concrete sensor adapter over the [`SensorHub`].
pub struct SensorAdapter {
    hub: SensorHub,
}

impl SensorAdapter {
    pub fn new(hub: SensorHub) -> Self {
        Self { hub }
    }
}

impl SensorPort for SensorAdapter {
    fn read_measurement(&mut self) -> Measurement {
        self.hub.read_measurement()
    }

    fn read_gas_raw(&mut self) -> u16 {
        self.hub.read_gas_raw()
    }
}

// ── IndicatorPort adapter ─────────────────────────────────────

/// Concrete indicator adapter over the [`TriColorLed`] driver.
pub struct IndicatorAdapter {
    led: TriColorLed,
}

impl IndicatorAdapter {
    pub fn new(led: TriColorLed) -> Self {
        Self { led }
    }

    /// Last state written to the LEDs.
    pub fn current(&self) -> IndicatorState {
        self.led.current()
    }
}

impl IndicatorPort for IndicatorAdapter {
    fn set_state(&mut self, state: IndicatorState) {
        self.led.set(state);
    }
}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use super::*;
    use crate::pins;
    use crate::sensors::climate::ClimateSensor;
    use crate::sensors::gas::{sim_set_gas_adc, GasSensor};

    #[test]
    fn sensor_adapter_delegates_to_hub() {
        let mut sensors = SensorAdapter::new(SensorHub::new(
            GasSensor::new(pins::GAS_ADC_GPIO),
            ClimateSensor::new(pins::DHT_GPIO),
        ));
        sim_set_gas_adc(512);
        assert_eq!(sensors.read_gas_raw(), 512);
        assert_eq!(sensors.read_measurement().gas_raw, 512);
    }

    #[test]
    fn indicator_adapter_tracks_state() {
        let mut indicator = IndicatorAdapter::new(TriColorLed::new());
        indicator.set_state(IndicatorState::Spoiled);
        assert_eq!(indicator.current(), IndicatorState::Spoiled);
    }
}
