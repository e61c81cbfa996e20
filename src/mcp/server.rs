//! RecipeKit MCP Server Implementation
//!
//! Exposes the nutrition and pagination calculators as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::models::NutritionData;
use crate::tools::nutrition;
use crate::tools::pagination;
use crate::tools::status::StatusTracker;

/// RecipeKit MCP Service
#[derive(Clone)]
pub struct RecipeKitService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: ServerConfig,
    tool_router: ToolRouter<RecipeKitService>,
}

impl RecipeKitService {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config))),
            config,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Nutrition Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleNutritionParams {
    /// Nutrition for a single serving
    pub nutrition: NutritionData,
    /// Number of servings (e.g. 1.5)
    pub servings: f64,
}

// ============================================================================
// Pagination Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BuildPageMarkersParams {
    /// Current page (1-based)
    pub current_page: u32,
    /// Total number of pages (at least 1)
    pub total_pages: u32,
    /// Pages shown on each side of the current page (server default if omitted)
    pub sibling_count: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComputePageInfoParams {
    /// Current page (1-based)
    pub current_page: u32,
    /// Items per page (server default if omitted)
    pub page_size: Option<u32>,
    /// Total number of items across all pages
    pub total_items: u64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl RecipeKitService {
    // --- Status ---

    #[tool(description = "Get the current status of the RecipeKit service including build info, configuration, and process information")]
    async fn recipekit_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    // --- Nutrition ---

    #[tool(description = "Calculate percent daily values (FDA, 2000 kcal diet) for one serving. Percentages are not capped at 100. Optional vitamins/minerals are only reported when provided.")]
    fn calculate_daily_values(&self, Parameters(data): Parameters<NutritionData>) -> Result<CallToolResult, McpError> {
        let result = nutrition::daily_values(&data).map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Classify one serving against dietary rules: keto, low-carb, high-protein, low-fat, low-sodium, high-fiber")]
    fn get_dietary_compliance(&self, Parameters(data): Parameters<NutritionData>) -> Result<CallToolResult, McpError> {
        let result = nutrition::dietary_compliance(&data).map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get the full nutrition facts summary for one serving: daily values, dietary compliance tags, and percent of calories from fat")]
    fn nutrition_facts(&self, Parameters(data): Parameters<NutritionData>) -> Result<CallToolResult, McpError> {
        let result = nutrition::facts(&data).map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Scale single-serving nutrition to a number of servings and return the scaled values with their nutrition facts")]
    fn scale_nutrition(&self, Parameters(p): Parameters<ScaleNutritionParams>) -> Result<CallToolResult, McpError> {
        let result = nutrition::scale_nutrition(&p.nutrition, p.servings)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    // --- Pagination ---

    #[tool(description = "Build the pager sequence (page numbers and \"ellipsis\" gaps) for a position, plus whether Previous/Next are available")]
    fn build_page_markers(&self, Parameters(p): Parameters<BuildPageMarkersParams>) -> Result<CallToolResult, McpError> {
        let siblings = p.sibling_count.unwrap_or(self.config.sibling_count);
        let result = pagination::page_markers(p.current_page, p.total_pages, siblings)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Compute the 1-based item range shown on a page (\"Showing X-Y of Z results\") and the total page count")]
    fn compute_page_info(&self, Parameters(p): Parameters<ComputePageInfoParams>) -> Result<CallToolResult, McpError> {
        let page_size = p.page_size.unwrap_or(self.config.page_size);
        let result = pagination::page_info(p.current_page, page_size, p.total_items)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for RecipeKitService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "recipekit".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("RecipeKit".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "RecipeKit - nutrition facts and pagination calculations for recipe pages. \
                 Nutrition (per serving): calculate_daily_values, get_dietary_compliance, \
                 nutrition_facts, scale_nutrition. \
                 Pagination: build_page_markers, compute_page_info. \
                 Status: recipekit_status."
                    .into(),
            ),
        }
    }
}
