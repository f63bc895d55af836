//! Request types for MCP tools

use rmcp::schemars;
use serde::Deserialize;

/// Request for lenses tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LensesRequest {
    #[schemars(description = "Go file path, absolute or relative to the workspace root")]
    pub path: String,
    #[schemars(
        description = "Optional editor language id of the buffer (e.g. \"go\"). Defaults to detection by file extension."
    )]
    pub language: Option<String>,
}

/// Request for navigate tool
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NavigateRequest {
    #[schemars(
        description = "Handler names to try in order, e.g. [\"GetUserQueryHandler\", \"getUserQueryHandler\"]. A single name also tries its lower-camel variant."
    )]
    pub handler_names: Vec<String>,
}
