//! Nutrition calculation module
//!
//! Daily value percentages and dietary compliance classification.

pub mod compliance;
pub mod daily_values;
pub mod facts;

pub use compliance::{fat_percentage, get_dietary_compliance, DietaryCompliance};
pub use daily_values::{
    calculate_daily_values, percent_of, DailyValuePercentages,
    ReferenceDailyValue, REFERENCE_DAILY_VALUES,
};
pub use facts::{nutrition_facts, NutritionFacts};
