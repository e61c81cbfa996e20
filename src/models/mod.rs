//! Data models
//!
//! Plain serde structs shared by the calculators and the tool layer.

mod nutrition;

pub use nutrition::{NutritionData, NutritionError};
