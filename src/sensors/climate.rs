//! DHT11 combined temperature/humidity sensor driver.
//!
//! The DHT11 answers a start pulse with a 40-bit frame: humidity
//! integer/decimal, temperature integer/decimal, checksum.  Frame capture
//! is bit-banged in `hw_init` on target; this module owns decoding and the
//! invalid-read policy.
//!
//! A failed read (no response, bad checksum) maps to `None` fields — the
//! classifier degrades to gas-only operation for that tick instead of
//! halting, so a flaky climate sensor never stops the monitor.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: captures the one-wire frame via hw_init.
//! On host/test: reads f32 bit-patterns from static `AtomicU32`s; store a
//! NaN to simulate an invalid read.

use core::sync::atomic::AtomicU32;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::error::SensorError;

static SIM_TEMP_BITS: AtomicU32 = AtomicU32::new(f32::to_bits(20.0));
static SIM_HUM_BITS: AtomicU32 = AtomicU32::new(f32::to_bits(40.0));

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temperature(celsius: f32) {
    SIM_TEMP_BITS.store(celsius.to_bits(), Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_humidity(pct: f32) {
    SIM_HUM_BITS.store(pct.to_bits(), Ordering::Relaxed);
}

/// One climate read; either field is `None` when invalid.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClimateReading {
    pub temperature_c: Option<f32>,
    pub humidity_pct: Option<f32>,
}

pub struct ClimateSensor {
    _data_gpio: i32,
}

impl ClimateSensor {
    pub fn new(data_gpio: i32) -> Self {
        Self {
            _data_gpio: data_gpio,
        }
    }

    #[cfg(target_os = "espidf")]
    pub fn read(&mut self) -> ClimateReading {
        match hw_init::dht11_read_frame(self._data_gpio).and_then(decode_frame) {
            Ok((temperature, humidity)) => ClimateReading {
                temperature_c: Some(temperature),
                humidity_pct: Some(humidity),
            },
            Err(e) => {
                log::warn!("DHT11 read failed: {e} — gas-only tick");
                ClimateReading::default_invalid()
            }
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn read(&mut self) -> ClimateReading {
        let temp = f32::from_bits(SIM_TEMP_BITS.load(Ordering::Relaxed));
        let hum = f32::from_bits(SIM_HUM_BITS.load(Ordering::Relaxed));
        ClimateReading {
            temperature_c: (!temp.is_nan()).then_some(temp),
            humidity_pct: (!hum.is_nan()).then_some(hum),
        }
    }
}

#[cfg(target_os = "espidf")]
impl ClimateReading {
    fn default_invalid() -> Self {
        Self {
            temperature_c: None,
            humidity_pct: None,
        }
    }
}

/// Decode a captured DHT11 frame into `(temperature_c, humidity_pct)`.
///
/// Byte layout: `[hum_int, hum_dec, temp_int, temp_dec, checksum]` with
/// the checksum being the wrapping sum of the first four bytes.
pub fn decode_frame(frame: [u8; 5]) -> Result<(f32, f32), SensorError> {
    let sum = frame[0]
        .wrapping_add(frame[1])
        .wrapping_add(frame[2])
        .wrapping_add(frame[3]);
    if sum != frame[4] {
        return Err(SensorError::ChecksumMismatch);
    }

    let humidity = f32::from(frame[0]) + f32::from(frame[1]) * 0.1;
    let temperature = f32::from(frame[2]) + f32::from(frame[3]) * 0.1;
    if !(0.0..=100.0).contains(&humidity) || !(-40.0..=80.0).contains(&temperature) {
        return Err(SensorError::OutOfRange);
    }
    Ok((temperature, humidity))
}
