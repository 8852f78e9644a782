//! Food sensitivity table.
//!
//! Each food type maps to a fixed multiplier applied to every classification
//! threshold.  A factor below 1.0 shrinks the thresholds, so sensitive foods
//! (poultry, dairy) trip Caution/Spoiled earlier than the generic profile.

use serde::{Deserialize, Serialize};

/// Closed set of monitored food categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodType {
    #[default]
    Generic,
    Poultry,
    Dairy,
    Cooked,
    Fruits,
    Vegetables,
    Salad,
}

impl FoodType {
    /// Threshold multiplier for this food type.  Lower = more sensitive.
    pub fn factor(self) -> f32 {
        match self {
            Self::Generic => 1.0,
            Self::Poultry => 0.85,
            Self::Dairy => 0.88,
            Self::Cooked => 0.90,
            Self::Fruits | Self::Vegetables | Self::Salad => 0.98,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_is_neutral() {
        assert_eq!(FoodType::Generic.factor(), 1.0);
    }

    #[test]
    fn all_factors_are_sensitising_or_neutral() {
        for food in [
            FoodType::Generic,
            FoodType::Poultry,
            FoodType::Dairy,
            FoodType::Cooked,
            FoodType::Fruits,
            FoodType::Vegetables,
            FoodType::Salad,
        ] {
            let f = food.factor();
            assert!(f > 0.0 && f <= 1.0, "{food:?} factor {f} out of range");
        }
    }

    #[test]
    fn poultry_is_most_sensitive() {
        let poultry = FoodType::Poultry.factor();
        for food in [
            FoodType::Generic,
            FoodType::Dairy,
            FoodType::Cooked,
            FoodType::Fruits,
            FoodType::Vegetables,
            FoodType::Salad,
        ] {
            assert!(poultry <= food.factor());
        }
    }
}
