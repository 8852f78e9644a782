//! Spoilage classifier.
//!
//! Pure function of one measurement plus the calibrated baseline and the
//! food sensitivity factor.  Two independent deviation measures are
//! compared against food-adjusted thresholds:
//!
//! - **ratio** — multiplicative deviation (`gas / baseline`)
//! - **delta** — additive deviation (`gas - baseline`, raw ADC units)
//!
//! Either measure can trip a verdict on its own.  Environmental risk
//! (warm or humid ambient) can then *upgrade* a borderline verdict — it
//! never downgrades one.  An invalid climate reading simply disables the
//! corresponding risk flag for that tick; classification continues
//! gas-only rather than halting.

use serde::{Deserialize, Serialize};

use crate::config::SystemConfig;

// ---------------------------------------------------------------------------
// Measurement
// ---------------------------------------------------------------------------

/// A single sampling instant.  Produced and consumed within one
/// classification tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Raw MQ-135 ADC reading (0 – 4095).
    pub gas_raw: u16,
    /// Ambient temperature (°C); `None` when the DHT11 read was invalid.
    pub temperature_c: Option<f32>,
    /// Relative humidity (%); `None` when the DHT11 read was invalid.
    pub humidity_pct: Option<f32>,
}

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Tri-state classification output.  Exactly one holds per tick; the
/// derived ordering (`Fresh < Caution < Spoiled`) is the severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Verdict {
    Fresh,
    Caution,
    Spoiled,
}

// ---------------------------------------------------------------------------
// Decision procedure
// ---------------------------------------------------------------------------

/// Classify one measurement against the calibrated baseline.
///
/// `factor` is the food sensitivity multiplier from
/// [`FoodType::factor`](super::food::FoodType::factor).  Order matters:
/// the gas thresholds decide first, then environmental risk may upgrade
/// the result (Caution via warm *or* humid ambient, Spoiled via warm
/// ambient only), each gated on the gas ratio already sitting within the
/// escalation margin of the respective threshold.
pub fn classify(m: &Measurement, baseline: f32, factor: f32, config: &SystemConfig) -> Verdict {
    // A near-zero baseline means calibration never ran; treat the reading
    // as baseline-equal rather than dividing by it.
    let ratio = if baseline > 0.1 {
        f32::from(m.gas_raw) / baseline
    } else {
        1.0
    };
    let delta = f32::from(m.gas_raw) - baseline;

    let eff_yellow_ratio = config.ratio_yellow * factor;
    let eff_red_ratio = config.ratio_red * factor;
    let eff_yellow_delta = (config.delta_yellow as f32 * factor) as i32;
    let eff_red_delta = (config.delta_red as f32 * factor) as i32;

    let temp_risk = m.temperature_c.is_some_and(|t| t >= config.temp_risk_c);
    let hum_risk = m.humidity_pct.is_some_and(|h| h >= config.humidity_risk_pct);

    let mut spoiled = ratio >= eff_red_ratio || delta >= eff_red_delta as f32;
    let mut caution =
        !spoiled && (ratio >= eff_yellow_ratio || delta >= eff_yellow_delta as f32);

    if !spoiled {
        if (temp_risk || hum_risk) && ratio >= config.escalation_margin * eff_yellow_ratio {
            caution = true;
        }
        if temp_risk && ratio >= config.escalation_margin * eff_red_ratio {
            spoiled = true;
        }
    }

    if spoiled {
        Verdict::Spoiled
    } else if caution {
        Verdict::Caution
    } else {
        Verdict::Fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::food::FoodType;

    fn cfg() -> SystemConfig {
        SystemConfig::default()
    }

    fn m(gas: u16, temp: f32, hum: f32) -> Measurement {
        Measurement {
            gas_raw: gas,
            temperature_c: Some(temp),
            humidity_pct: Some(hum),
        }
    }

    // Scenarios from the bench validation runs: baseline 200, cold dry
    // ambient, generic food profile.

    #[test]
    fn baseline_equal_reading_is_fresh() {
        assert_eq!(classify(&m(200, 4.0, 50.0), 200.0, 1.0, &cfg()), Verdict::Fresh);
    }

    #[test]
    fn ratio_above_yellow_is_caution() {
        // 260 / 200 = 1.30 >= 1.20
        assert_eq!(classify(&m(260, 4.0, 50.0), 200.0, 1.0, &cfg()), Verdict::Caution);
    }

    #[test]
    fn ratio_above_red_is_spoiled() {
        // 310 / 200 = 1.55 >= 1.50
        assert_eq!(classify(&m(310, 4.0, 50.0), 200.0, 1.0, &cfg()), Verdict::Spoiled);
    }

    #[test]
    fn warm_ambient_below_escalation_margin_stays_fresh() {
        // 225 / 200 = 1.125, margin boundary is 0.95 * 1.20 = 1.14 —
        // the escalation gate is exact, not approximate.
        assert_eq!(classify(&m(225, 9.0, 50.0), 200.0, 1.0, &cfg()), Verdict::Fresh);
    }

    #[test]
    fn warm_ambient_at_escalation_margin_upgrades_to_caution() {
        // 230 / 200 = 1.15 >= 1.14, temperature risk active.
        assert_eq!(classify(&m(230, 9.0, 50.0), 200.0, 1.0, &cfg()), Verdict::Caution);
    }

    #[test]
    fn humid_ambient_at_escalation_margin_upgrades_to_caution() {
        assert_eq!(classify(&m(230, 4.0, 90.0), 200.0, 1.0, &cfg()), Verdict::Caution);
    }

    #[test]
    fn warm_ambient_near_red_upgrades_to_spoiled() {
        // 290 / 200 = 1.45 >= 0.95 * 1.50 = 1.425, temperature risk active.
        assert_eq!(classify(&m(290, 9.0, 50.0), 200.0, 1.0, &cfg()), Verdict::Spoiled);
    }

    #[test]
    fn humidity_alone_never_upgrades_to_spoiled() {
        // Same gas level, humid but cold: Caution is the ceiling.
        assert_eq!(classify(&m(290, 4.0, 90.0), 200.0, 1.0, &cfg()), Verdict::Caution);
    }

    #[test]
    fn sensitive_food_shrinks_thresholds() {
        // 235 / 200 = 1.175: Fresh for Generic, but Poultry's effective
        // yellow ratio is 1.20 * 0.85 = 1.02.
        let poultry = FoodType::Poultry.factor();
        assert_eq!(classify(&m(235, 4.0, 50.0), 200.0, poultry, &cfg()), Verdict::Caution);
        assert_eq!(classify(&m(235, 4.0, 50.0), 200.0, 1.0, &cfg()), Verdict::Fresh);
    }

    #[test]
    fn delta_alone_can_trip_both_thresholds() {
        // High baseline keeps the ratio low; the additive delta still fires.
        let base = 3_000.0;
        assert_eq!(classify(&m(3_150, 4.0, 50.0), base, 1.0, &cfg()), Verdict::Caution);
        assert_eq!(classify(&m(3_400, 4.0, 50.0), base, 1.0, &cfg()), Verdict::Spoiled);
    }

    #[test]
    fn spoiled_ignores_climate_validity() {
        let reading = Measurement {
            gas_raw: 310,
            temperature_c: None,
            humidity_pct: None,
        };
        assert_eq!(classify(&reading, 200.0, 1.0, &cfg()), Verdict::Spoiled);
    }

    #[test]
    fn invalid_climate_never_escalates() {
        // Gas ratio inside the escalation margin, but both reads invalid:
        // the risk flags are forced off and the verdict stays Fresh.
        let reading = Measurement {
            gas_raw: 230,
            temperature_c: None,
            humidity_pct: None,
        };
        assert_eq!(classify(&reading, 200.0, 1.0, &cfg()), Verdict::Fresh);
    }

    #[test]
    fn uncalibrated_baseline_reads_as_ratio_one() {
        // Baseline below the 0.1 floor: ratio pinned to 1.0, so only the
        // delta path can fire.
        assert_eq!(classify(&m(100, 4.0, 50.0), 0.0, 1.0, &cfg()), Verdict::Fresh);
        assert_eq!(classify(&m(500, 4.0, 50.0), 0.0, 1.0, &cfg()), Verdict::Spoiled);
    }

    #[test]
    fn classifier_is_pure() {
        let reading = m(260, 9.0, 90.0);
        let first = classify(&reading, 200.0, 0.88, &cfg());
        for _ in 0..10 {
            assert_eq!(classify(&reading, 200.0, 0.88, &cfg()), first);
        }
    }
}
