//! RecipeKit
//!
//! An MCP server for recipe nutrition facts and pager calculations.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use recipekit::build_info;
use recipekit::config::ServerConfig;
use recipekit::mcp::RecipeKitService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout is the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("recipekit=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ServerConfig::from_env();
    tracing::info!(
        sibling_count = config.sibling_count,
        page_size = config.page_size,
        "Starting MCP server on stdio"
    );

    let service = RecipeKitService::new(config);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
