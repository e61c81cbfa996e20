//! Shared nutrition data structure
//!
//! Per-serving nutrient amounts as rendered on a nutrition facts panel.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Nutrition validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionError {
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// Per-serving nutritional information
///
/// Doubles as the MCP tool input, so every required nutrient must be
/// supplied; an unknown amount is never read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionData {
    /// Kilocalories
    pub calories: f64,
    /// Grams
    pub total_fat: f64,
    /// Grams
    pub saturated_fat: f64,
    /// Grams
    pub trans_fat: f64,
    /// Milligrams
    pub cholesterol: f64,
    /// Milligrams
    pub sodium: f64,
    /// Grams
    pub total_carbohydrates: f64,
    /// Grams
    pub dietary_fiber: f64,
    /// Grams
    pub total_sugars: f64,
    /// Grams
    pub added_sugars: f64,
    /// Grams
    pub protein: f64,

    /// Micrograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_d: Option<f64>,
    /// Micrograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_a: Option<f64>,
    /// Milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    /// Milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,
    /// Milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
    /// Milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<f64>,
    /// Grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monounsaturated_fat: Option<f64>,
    /// Grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyunsaturated_fat: Option<f64>,
    /// Grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omega3: Option<f64>,
    /// Grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omega6: Option<f64>,
}

impl NutritionData {
    /// Create a new NutritionData with all required values zero and no optional values
    pub fn zero() -> Self {
        Self::default()
    }

    /// Every field paired with its name; optional fields are `None` when absent
    pub fn fields(&self) -> [(&'static str, Option<f64>); 21] {
        [
            ("calories", Some(self.calories)),
            ("totalFat", Some(self.total_fat)),
            ("saturatedFat", Some(self.saturated_fat)),
            ("transFat", Some(self.trans_fat)),
            ("cholesterol", Some(self.cholesterol)),
            ("sodium", Some(self.sodium)),
            ("totalCarbohydrates", Some(self.total_carbohydrates)),
            ("dietaryFiber", Some(self.dietary_fiber)),
            ("totalSugars", Some(self.total_sugars)),
            ("addedSugars", Some(self.added_sugars)),
            ("protein", Some(self.protein)),
            ("vitaminD", self.vitamin_d),
            ("vitaminA", self.vitamin_a),
            ("calcium", self.calcium),
            ("iron", self.iron),
            ("potassium", self.potassium),
            ("vitaminC", self.vitamin_c),
            ("monounsaturatedFat", self.monounsaturated_fat),
            ("polyunsaturatedFat", self.polyunsaturated_fat),
            ("omega3", self.omega3),
            ("omega6", self.omega6),
        ]
    }

    /// Check that every provided value is finite and non-negative
    ///
    /// The calculators accept anything; this is for callers that take
    /// nutrition values from untrusted input.
    pub fn validate(&self) -> Result<(), NutritionError> {
        for (field, value) in self.fields() {
            let Some(value) = value else { continue };
            if !value.is_finite() {
                return Err(NutritionError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(NutritionError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Scale nutrition values by a multiplier (e.g. servings eaten)
    pub fn scale(&self, multiplier: f64) -> Self {
        let opt = |v: Option<f64>| v.map(|x| x * multiplier);
        Self {
            calories: self.calories * multiplier,
            total_fat: self.total_fat * multiplier,
            saturated_fat: self.saturated_fat * multiplier,
            trans_fat: self.trans_fat * multiplier,
            cholesterol: self.cholesterol * multiplier,
            sodium: self.sodium * multiplier,
            total_carbohydrates: self.total_carbohydrates * multiplier,
            dietary_fiber: self.dietary_fiber * multiplier,
            total_sugars: self.total_sugars * multiplier,
            added_sugars: self.added_sugars * multiplier,
            protein: self.protein * multiplier,
            vitamin_d: opt(self.vitamin_d),
            vitamin_a: opt(self.vitamin_a),
            calcium: opt(self.calcium),
            iron: opt(self.iron),
            potassium: opt(self.potassium),
            vitamin_c: opt(self.vitamin_c),
            monounsaturated_fat: opt(self.monounsaturated_fat),
            polyunsaturated_fat: opt(self.polyunsaturated_fat),
            omega3: opt(self.omega3),
            omega6: opt(self.omega6),
        }
    }

    /// Add another nutrition record to this one
    ///
    /// An optional nutrient stays absent only if both sides lack it.
    pub fn add(&self, other: &NutritionData) -> Self {
        Self {
            calories: self.calories + other.calories,
            total_fat: self.total_fat + other.total_fat,
            saturated_fat: self.saturated_fat + other.saturated_fat,
            trans_fat: self.trans_fat + other.trans_fat,
            cholesterol: self.cholesterol + other.cholesterol,
            sodium: self.sodium + other.sodium,
            total_carbohydrates: self.total_carbohydrates + other.total_carbohydrates,
            dietary_fiber: self.dietary_fiber + other.dietary_fiber,
            total_sugars: self.total_sugars + other.total_sugars,
            added_sugars: self.added_sugars + other.added_sugars,
            protein: self.protein + other.protein,
            vitamin_d: add_optional(self.vitamin_d, other.vitamin_d),
            vitamin_a: add_optional(self.vitamin_a, other.vitamin_a),
            calcium: add_optional(self.calcium, other.calcium),
            iron: add_optional(self.iron, other.iron),
            potassium: add_optional(self.potassium, other.potassium),
            vitamin_c: add_optional(self.vitamin_c, other.vitamin_c),
            monounsaturated_fat: add_optional(self.monounsaturated_fat, other.monounsaturated_fat),
            polyunsaturated_fat: add_optional(self.polyunsaturated_fat, other.polyunsaturated_fat),
            omega3: add_optional(self.omega3, other.omega3),
            omega6: add_optional(self.omega6, other.omega6),
        }
    }
}

fn add_optional(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (None, None) => None,
        (a, b) => Some(a.unwrap_or(0.0) + b.unwrap_or(0.0)),
    }
}

impl std::ops::Add for NutritionData {
    type Output = NutritionData;

    fn add(self, other: NutritionData) -> NutritionData {
        NutritionData::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for NutritionData {
    type Output = NutritionData;

    fn mul(self, multiplier: f64) -> NutritionData {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutritionData {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionData::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oatmeal() -> NutritionData {
        NutritionData {
            calories: 150.0,
            total_fat: 3.0,
            saturated_fat: 0.5,
            total_carbohydrates: 27.0,
            dietary_fiber: 4.0,
            total_sugars: 1.0,
            protein: 5.0,
            iron: Some(1.7),
            ..Default::default()
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "calories": 250, "totalFat": 12, "saturatedFat": 3, "transFat": 0,
            "cholesterol": 30, "sodium": 470, "totalCarbohydrates": 31,
            "dietaryFiber": 0, "totalSugars": 5, "addedSugars": 0, "protein": 5,
            "vitaminD": 0
        }"#;
        let data: NutritionData = serde_json::from_str(json).unwrap();
        assert_eq!(data.total_fat, 12.0);
        assert_eq!(data.total_carbohydrates, 31.0);
        assert_eq!(data.vitamin_d, Some(0.0));
        assert_eq!(data.calcium, None);
    }

    #[test]
    fn test_serialize_omits_absent_optionals() {
        let value = serde_json::to_value(oatmeal()).unwrap();
        assert_eq!(value["iron"], 1.7);
        assert!(value.get("vitaminD").is_none());
        assert!(value.get("dietaryFiber").is_some());
    }

    #[test]
    fn test_validate_accepts_zero() {
        let data = NutritionData { vitamin_c: Some(0.0), ..Default::default() };
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative() {
        let data = NutritionData { sodium: -5.0, ..oatmeal() };
        assert_eq!(
            data.validate(),
            Err(NutritionError::Negative { field: "sodium", value: -5.0 })
        );

        let data = NutritionData { omega3: Some(-0.1), ..oatmeal() };
        assert!(matches!(
            data.validate(),
            Err(NutritionError::Negative { field: "omega3", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let data = NutritionData { calories: f64::NAN, ..oatmeal() };
        assert_eq!(data.validate(), Err(NutritionError::NotFinite { field: "calories" }));
    }

    #[test]
    fn test_scale_keeps_absent_optionals() {
        let doubled = oatmeal().scale(2.0);
        assert!((doubled.calories - 300.0).abs() < 1e-9);
        assert!((doubled.protein - 10.0).abs() < 1e-9);
        assert_eq!(doubled.iron, Some(3.4));
        assert_eq!(doubled.vitamin_d, None);
    }

    #[test]
    fn test_sum_merges_optionals() {
        let milk = NutritionData {
            calories: 100.0,
            protein: 8.0,
            calcium: Some(300.0),
            ..Default::default()
        };
        let total: NutritionData = vec![oatmeal(), milk].into_iter().sum();
        assert!((total.calories - 250.0).abs() < 1e-9);
        assert!((total.protein - 13.0).abs() < 1e-9);
        assert_eq!(total.calcium, Some(300.0));
        assert_eq!(total.iron, Some(1.7));
        assert_eq!(total.vitamin_a, None);
    }
}
