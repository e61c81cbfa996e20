//! Nutrition MCP Tools
//!
//! Validates incoming nutrition values and runs the calculators.

use serde::Serialize;

use crate::models::NutritionData;
use crate::nutrition::{
    calculate_daily_values, get_dietary_compliance, nutrition_facts, DailyValuePercentages,
    DietaryCompliance, NutritionFacts, ReferenceDailyValue, REFERENCE_DAILY_VALUES,
};

/// Response for calculate_daily_values
#[derive(Debug, Serialize)]
pub struct DailyValuesResponse {
    pub daily_values: DailyValuePercentages,
    pub reference: &'static [ReferenceDailyValue],
}

/// A compliance tag with its display text
#[derive(Debug, Serialize)]
pub struct ComplianceBadge {
    pub tag: DietaryCompliance,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<DietaryCompliance> for ComplianceBadge {
    fn from(tag: DietaryCompliance) -> Self {
        Self {
            tag,
            label: tag.label(),
            description: tag.description(),
        }
    }
}

/// Response for get_dietary_compliance
#[derive(Debug, Serialize)]
pub struct ComplianceResponse {
    pub badges: Vec<ComplianceBadge>,
    pub count: usize,
}

/// Response for scale_nutrition
#[derive(Debug, Serialize)]
pub struct ScaleNutritionResponse {
    pub servings: f64,
    pub nutrition: NutritionData,
    pub facts: NutritionFacts,
}

fn validated(data: &NutritionData) -> Result<(), String> {
    data.validate().map_err(|e| format!("Invalid nutrition data: {}", e))
}

/// Daily value percentages for one serving
pub fn daily_values(data: &NutritionData) -> Result<DailyValuesResponse, String> {
    validated(data)?;

    Ok(DailyValuesResponse {
        daily_values: calculate_daily_values(data),
        reference: &REFERENCE_DAILY_VALUES,
    })
}

/// Dietary compliance badges for one serving
pub fn dietary_compliance(data: &NutritionData) -> Result<ComplianceResponse, String> {
    validated(data)?;

    let badges: Vec<ComplianceBadge> = get_dietary_compliance(data)
        .into_iter()
        .map(ComplianceBadge::from)
        .collect();
    let count = badges.len();

    Ok(ComplianceResponse { badges, count })
}

/// Full nutrition facts summary for one serving
pub fn facts(data: &NutritionData) -> Result<NutritionFacts, String> {
    validated(data)?;
    Ok(nutrition_facts(data))
}

/// Scale a per-serving record to a number of servings and summarize it
pub fn scale_nutrition(data: &NutritionData, servings: f64) -> Result<ScaleNutritionResponse, String> {
    if !servings.is_finite() || servings <= 0.0 {
        return Err("servings must be greater than 0".to_string());
    }
    validated(data)?;

    let nutrition = data.scale(servings);
    let facts = nutrition_facts(&nutrition);

    Ok(ScaleNutritionResponse {
        servings,
        nutrition,
        facts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granola() -> NutritionData {
        NutritionData {
            calories: 200.0,
            total_fat: 8.0,
            saturated_fat: 1.0,
            sodium: 90.0,
            total_carbohydrates: 28.0,
            dietary_fiber: 6.0,
            total_sugars: 9.0,
            added_sugars: 7.0,
            protein: 5.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_daily_values_includes_reference() {
        let resp = daily_values(&granola()).unwrap();
        assert_eq!(resp.daily_values.total_fat, 12);
        assert_eq!(resp.reference.len(), 12);
    }

    #[test]
    fn test_invalid_data_rejected() {
        let data = NutritionData { protein: -1.0, ..granola() };
        let err = daily_values(&data).unwrap_err();
        assert!(err.contains("protein cannot be negative"), "{}", err);
        assert!(dietary_compliance(&data).is_err());
        assert!(facts(&data).is_err());
    }

    #[test]
    fn test_compliance_badges() {
        let resp = dietary_compliance(&granola()).unwrap();
        let tags: Vec<DietaryCompliance> = resp.badges.iter().map(|b| b.tag).collect();
        assert_eq!(
            tags,
            vec![DietaryCompliance::LowCarb, DietaryCompliance::LowSodium, DietaryCompliance::HighFiber]
        );
        assert_eq!(resp.count, 3);
        assert_eq!(resp.badges[2].label, "High Fiber");
    }

    #[test]
    fn test_scale_nutrition() {
        let resp = scale_nutrition(&granola(), 2.0).unwrap();
        assert!((resp.nutrition.calories - 400.0).abs() < 1e-9);
        assert_eq!(resp.facts.daily_values.total_fat, 25);
        assert!(!resp.facts.compliance.contains(&DietaryCompliance::LowSodium));

        assert!(scale_nutrition(&granola(), 0.0).is_err());
        assert!(scale_nutrition(&granola(), f64::INFINITY).is_err());
    }
}
