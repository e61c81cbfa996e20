//! RecipeKit Tools module
//!
//! MCP tool implementations backed by the nutrition and pagination calculators.

pub mod nutrition;
pub mod pagination;
pub mod status;
