//! Dietary compliance classification
//!
//! Fixed threshold rules that tag a serving as keto, low-carb, etc.
//! Every threshold is strict: a value sitting exactly on the boundary
//! does not qualify.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::NutritionData;

/// Keto: carbohydrates below this many grams...
pub const KETO_MAX_CARBS_G: f64 = 20.0;
/// ...and fat above this many grams
pub const KETO_MIN_FAT_G: f64 = 20.0;
pub const LOW_CARB_MAX_CARBS_G: f64 = 50.0;
pub const HIGH_PROTEIN_MIN_G: f64 = 20.0;
/// Percent of calories from fat
pub const LOW_FAT_MAX_PERCENT: f64 = 30.0;
pub const LOW_SODIUM_MAX_MG: f64 = 140.0;
pub const HIGH_FIBER_MIN_G: f64 = 5.0;

/// Calories per gram of fat
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// A dietary compliance tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryCompliance {
    Keto,
    LowCarb,
    HighProtein,
    LowFat,
    LowSodium,
    HighFiber,
}

impl DietaryCompliance {
    /// All tags in evaluation order
    pub const ALL: [DietaryCompliance; 6] = [
        DietaryCompliance::Keto,
        DietaryCompliance::LowCarb,
        DietaryCompliance::HighProtein,
        DietaryCompliance::LowFat,
        DietaryCompliance::LowSodium,
        DietaryCompliance::HighFiber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryCompliance::Keto => "keto",
            DietaryCompliance::LowCarb => "low-carb",
            DietaryCompliance::HighProtein => "high-protein",
            DietaryCompliance::LowFat => "low-fat",
            DietaryCompliance::LowSodium => "low-sodium",
            DietaryCompliance::HighFiber => "high-fiber",
        }
    }

    /// Badge text
    pub fn label(&self) -> &'static str {
        match self {
            DietaryCompliance::Keto => "Keto",
            DietaryCompliance::LowCarb => "Low Carb",
            DietaryCompliance::HighProtein => "High Protein",
            DietaryCompliance::LowFat => "Low Fat",
            DietaryCompliance::LowSodium => "Low Sodium",
            DietaryCompliance::HighFiber => "High Fiber",
        }
    }

    /// Human-readable rule
    pub fn description(&self) -> &'static str {
        match self {
            DietaryCompliance::Keto => "Under 20g carbohydrates and over 20g fat per serving",
            DietaryCompliance::LowCarb => "Under 50g carbohydrates per serving",
            DietaryCompliance::HighProtein => "Over 20g protein per serving",
            DietaryCompliance::LowFat => "Under 30% of calories from fat",
            DietaryCompliance::LowSodium => "Under 140mg sodium per serving",
            DietaryCompliance::HighFiber => "Over 5g dietary fiber per serving",
        }
    }

    /// Whether a serving satisfies this tag's rule
    pub fn matches(&self, nutrition: &NutritionData) -> bool {
        match self {
            DietaryCompliance::Keto => {
                nutrition.total_carbohydrates < KETO_MAX_CARBS_G
                    && nutrition.total_fat > KETO_MIN_FAT_G
            }
            DietaryCompliance::LowCarb => nutrition.total_carbohydrates < LOW_CARB_MAX_CARBS_G,
            DietaryCompliance::HighProtein => nutrition.protein > HIGH_PROTEIN_MIN_G,
            // Zero calories gives inf or NaN here, and both compare false.
            DietaryCompliance::LowFat => fat_percentage(nutrition) < LOW_FAT_MAX_PERCENT,
            DietaryCompliance::LowSodium => nutrition.sodium < LOW_SODIUM_MAX_MG,
            DietaryCompliance::HighFiber => nutrition.dietary_fiber > HIGH_FIBER_MIN_G,
        }
    }
}

impl fmt::Display for DietaryCompliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryCompliance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        DietaryCompliance::ALL
            .into_iter()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| format!("Unknown dietary compliance tag: {}", s))
    }
}

/// Percent of calories that come from fat
///
/// Not finite when `calories` is zero.
pub fn fat_percentage(nutrition: &NutritionData) -> f64 {
    let fat_calories = nutrition.total_fat * KCAL_PER_GRAM_FAT;
    (fat_calories / nutrition.calories) * 100.0
}

/// Classify a serving against every dietary rule
///
/// Tags come back in evaluation order; a serving can match any number of them.
pub fn get_dietary_compliance(nutrition: &NutritionData) -> Vec<DietaryCompliance> {
    if nutrition.calories <= 0.0 {
        tracing::debug!(
            calories = nutrition.calories,
            "Fat percentage undefined; low-fat rule will not match"
        );
    }

    DietaryCompliance::ALL
        .into_iter()
        .filter(|tag| tag.matches(nutrition))
        .collect()
}
