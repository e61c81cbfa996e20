//! RecipeKit Library
//!
//! Nutrition facts and pagination logic behind the recipe design system.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod pagination;
pub mod tools;
