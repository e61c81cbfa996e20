//! Nutrition facts summary
//!
//! Everything a nutrition facts panel needs for one serving.

use serde::Serialize;

use super::compliance::{fat_percentage, get_dietary_compliance, DietaryCompliance};
use super::daily_values::{calculate_daily_values, DailyValuePercentages};
use crate::models::NutritionData;

/// Computed view of a serving's nutrition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    pub daily_values: DailyValuePercentages,
    pub compliance: Vec<DietaryCompliance>,
    /// Percent of calories from fat, rounded to one decimal; `None` without calories
    pub calories_from_fat_percent: Option<f64>,
}

/// Build the nutrition facts summary for a serving
pub fn nutrition_facts(nutrition: &NutritionData) -> NutritionFacts {
    let calories_from_fat_percent = if nutrition.calories > 0.0 {
        Some((fat_percentage(nutrition) * 10.0).round() / 10.0)
    } else {
        None
    };

    NutritionFacts {
        daily_values: calculate_daily_values(nutrition),
        compliance: get_dietary_compliance(nutrition),
        calories_from_fat_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrition_facts_combines_results() {
        let salmon = NutritionData {
            calories: 280.0,
            total_fat: 18.0,
            saturated_fat: 3.0,
            cholesterol: 70.0,
            sodium: 75.0,
            protein: 28.0,
            vitamin_d: Some(14.0),
            ..Default::default()
        };

        let facts = nutrition_facts(&salmon);
        assert_eq!(facts.daily_values.total_fat, 28);
        assert_eq!(facts.daily_values.vitamin_d, Some(70));
        assert_eq!(
            facts.compliance,
            vec![
                DietaryCompliance::LowCarb,
                DietaryCompliance::HighProtein,
                DietaryCompliance::LowSodium,
            ]
        );
        // 162 / 280 = 57.857%
        assert_eq!(facts.calories_from_fat_percent, Some(57.9));
    }

    #[test]
    fn test_zero_calories_has_no_fat_percent() {
        let water = NutritionData::zero();
        let facts = nutrition_facts(&water);
        assert_eq!(facts.calories_from_fat_percent, None);
        assert!(!facts.compliance.contains(&DietaryCompliance::LowFat));
        assert!(facts.compliance.contains(&DietaryCompliance::LowSodium));
    }
}
