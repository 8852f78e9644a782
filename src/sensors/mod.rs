//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns both sensor drivers and produces one [`Measurement`] per
//! classification tick.  Hardware access discipline (which task may read
//! when) is handled by the `SensorCell` wrapper in the app layer, not here.

pub mod climate;
pub mod gas;

use crate::app::classifier::Measurement;
use climate::ClimateSensor;
use gas::GasSensor;

/// Aggregates the gas and climate drivers.
pub struct SensorHub {
    pub gas: GasSensor,
    pub climate: ClimateSensor,
}

impl SensorHub {
    /// Construct a new hub.  Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(gas: GasSensor, climate: ClimateSensor) -> Self {
        Self { gas, climate }
    }

    /// Read both sensors and return a unified measurement.
    ///
    /// An invalid climate read yields `None` fields and the measurement is
    /// still returned — a flaky DHT11 must not stall the monitoring loop.
    pub fn read_measurement(&mut self) -> Measurement {
        let gas_raw = self.gas.read_raw();
        let climate = self.climate.read();
        Measurement {
            gas_raw,
            temperature_c: climate.temperature_c,
            humidity_pct: climate.humidity_pct,
        }
    }

    /// Gas-only read for the calibration sampling loop.
    pub fn read_gas_raw(&mut self) -> u16 {
        self.gas.read_raw()
    }
}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use super::*;
    use crate::pins;

    #[test]
    fn hub_combines_both_drivers() {
        let mut hub = SensorHub::new(
            GasSensor::new(pins::GAS_ADC_GPIO),
            ClimateSensor::new(pins::DHT_GPIO),
        );
        gas::sim_set_gas_adc(777);
        let m = hub.read_measurement();
        assert_eq!(m.gas_raw, 777);
        assert_eq!(hub.read_gas_raw(), 777);
    }
}
