//! Daily value reference table and percentage calculation
//!
//! FDA reference daily values for a 2000-calorie diet.

use serde::{Deserialize, Serialize};

use crate::models::NutritionData;

// ============================================================================
// Reference Daily Values
// ============================================================================

/// Total fat, grams
pub const DV_TOTAL_FAT: f64 = 65.0;
/// Saturated fat, grams
pub const DV_SATURATED_FAT: f64 = 20.0;
/// Cholesterol, milligrams
pub const DV_CHOLESTEROL: f64 = 300.0;
/// Sodium, milligrams
pub const DV_SODIUM: f64 = 2300.0;
/// Total carbohydrates, grams
pub const DV_TOTAL_CARBOHYDRATES: f64 = 300.0;
/// Dietary fiber, grams
pub const DV_DIETARY_FIBER: f64 = 25.0;
/// Vitamin D, micrograms
pub const DV_VITAMIN_D: f64 = 20.0;
/// Calcium, milligrams
pub const DV_CALCIUM: f64 = 1300.0;
/// Iron, milligrams
pub const DV_IRON: f64 = 18.0;
/// Potassium, milligrams
pub const DV_POTASSIUM: f64 = 4700.0;
/// Vitamin A, micrograms
pub const DV_VITAMIN_A: f64 = 900.0;
/// Vitamin C, milligrams
pub const DV_VITAMIN_C: f64 = 90.0;

/// One row of the reference table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceDailyValue {
    /// Field name as used in `NutritionData` JSON
    pub nutrient: &'static str,
    pub amount: f64,
    pub unit: &'static str,
}

/// Every nutrient with a reference daily value, in label order
pub const REFERENCE_DAILY_VALUES: [ReferenceDailyValue; 12] = [
    ReferenceDailyValue { nutrient: "totalFat", amount: DV_TOTAL_FAT, unit: "g" },
    ReferenceDailyValue { nutrient: "saturatedFat", amount: DV_SATURATED_FAT, unit: "g" },
    ReferenceDailyValue { nutrient: "cholesterol", amount: DV_CHOLESTEROL, unit: "mg" },
    ReferenceDailyValue { nutrient: "sodium", amount: DV_SODIUM, unit: "mg" },
    ReferenceDailyValue { nutrient: "totalCarbohydrates", amount: DV_TOTAL_CARBOHYDRATES, unit: "g" },
    ReferenceDailyValue { nutrient: "dietaryFiber", amount: DV_DIETARY_FIBER, unit: "g" },
    ReferenceDailyValue { nutrient: "vitaminD", amount: DV_VITAMIN_D, unit: "mcg" },
    ReferenceDailyValue { nutrient: "calcium", amount: DV_CALCIUM, unit: "mg" },
    ReferenceDailyValue { nutrient: "iron", amount: DV_IRON, unit: "mg" },
    ReferenceDailyValue { nutrient: "potassium", amount: DV_POTASSIUM, unit: "mg" },
    ReferenceDailyValue { nutrient: "vitaminA", amount: DV_VITAMIN_A, unit: "mcg" },
    ReferenceDailyValue { nutrient: "vitaminC", amount: DV_VITAMIN_C, unit: "mg" },
];

/// Percent of daily value per nutrient
///
/// Values are not clamped: a serving can exceed 100% of a daily value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyValuePercentages {
    pub total_fat: i64,
    pub saturated_fat: i64,
    pub cholesterol: i64,
    pub sodium: i64,
    pub total_carbohydrates: i64,
    pub dietary_fiber: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_d: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_a: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<i64>,
}

/// Percentage of `reference` that `value` represents, rounded to the nearest integer
pub fn percent_of(value: f64, reference: f64) -> i64 {
    ((value / reference) * 100.0).round() as i64
}

/// Compute daily value percentages for a serving
pub fn calculate_daily_values(nutrition: &NutritionData) -> DailyValuePercentages {
    let optional = |value: Option<f64>, reference: f64| value.map(|v| percent_of(v, reference));

    DailyValuePercentages {
        total_fat: percent_of(nutrition.total_fat, DV_TOTAL_FAT),
        saturated_fat: percent_of(nutrition.saturated_fat, DV_SATURATED_FAT),
        cholesterol: percent_of(nutrition.cholesterol, DV_CHOLESTEROL),
        sodium: percent_of(nutrition.sodium, DV_SODIUM),
        total_carbohydrates: percent_of(nutrition.total_carbohydrates, DV_TOTAL_CARBOHYDRATES),
        dietary_fiber: percent_of(nutrition.dietary_fiber, DV_DIETARY_FIBER),
        vitamin_d: optional(nutrition.vitamin_d, DV_VITAMIN_D),
        calcium: optional(nutrition.calcium, DV_CALCIUM),
        iron: optional(nutrition.iron, DV_IRON),
        potassium: optional(nutrition.potassium, DV_POTASSIUM),
        vitamin_a: optional(nutrition.vitamin_a, DV_VITAMIN_A),
        vitamin_c: optional(nutrition.vitamin_c, DV_VITAMIN_C),
    }
}
