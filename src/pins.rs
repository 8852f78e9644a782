//! GPIO / peripheral pin assignments for the FoodGuard main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//!
//! Pin assignments match the prototype wiring: three discrete LEDs, one
//! momentary button, the MQ-135 analog output, and the DHT11 data line.

// ---------------------------------------------------------------------------
// Tri-colour indicator (discrete LEDs, active HIGH)
// ---------------------------------------------------------------------------

/// Green LED — "Fresh".
pub const LED_GREEN_GPIO: i32 = 25;
/// Yellow LED — "Caution".
pub const LED_YELLOW_GPIO: i32 = 26;
/// Red LED — "Spoiled".
pub const LED_RED_GPIO: i32 = 27;

// ---------------------------------------------------------------------------
// Sensors
// ---------------------------------------------------------------------------

/// MQ-135 gas sensor — analog voltage output.
/// ADC1 channel 6 (GPIO 34 on the classic ESP32).
pub const GAS_ADC_GPIO: i32 = 34;
/// ADC1 channel index for the MQ-135 (GPIO 34 → ADC1_CH6).
pub const GAS_ADC_CHANNEL: u32 = 6;

/// DHT11 combined temperature/humidity sensor — single-wire data line.
pub const DHT_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// User button (active-low with internal pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button toggling the monitor on/off.  Falling edge fires
/// the activation ISR.
pub const BUTTON_GPIO: i32 = 5;
