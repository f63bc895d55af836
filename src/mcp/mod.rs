//! MCP (Model Context Protocol) server implementation
//!
//! Exposes handler navigation as MCP tools:
//! - gocq_lenses: List command/query declarations in a Go file
//! - gocq_navigate: Locate a handler struct by name
//! - gocq_check: Report commands/queries without a handler

pub mod format;
pub mod handlers;
pub mod types;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};

use crate::WorkspaceConfig;
use handlers::{check::handle_check, lenses::handle_lenses, navigate::handle_navigate};
use types::{LensesRequest, NavigateRequest};

/// MCP server handler for gocq
///
/// Holds no state besides the workspace configuration; every call re-reads
/// the files it needs.
#[derive(Clone)]
pub struct GocqHandler {
    tool_router: ToolRouter<Self>,
    config: WorkspaceConfig,
}

#[tool_router]
impl GocqHandler {
    pub fn new(config: WorkspaceConfig) -> Self {
        Self {
            tool_router: Self::tool_router(),
            config,
        }
    }

    /// List navigable declarations in a file
    #[tool(description = "List the Command and Query struct declarations in a Go file, with the handler each one navigates to.")]
    fn gocq_lenses(&self, Parameters(req): Parameters<LensesRequest>) -> String {
        handle_lenses(&self.config.root, &req)
    }

    /// Locate a handler struct
    #[tool(description = "Locate a CQRS handler struct (e.g. GetUserQueryHandler) in the workspace. Returns file and line, or a not-found warning.")]
    fn gocq_navigate(&self, Parameters(req): Parameters<NavigateRequest>) -> String {
        handle_navigate(&self.config, &req)
    }

    /// Check every command and query for a handler
    #[tool(description = "Scan the workspace for Command and Query structs and report which ones have no handler.")]
    fn gocq_check(&self) -> String {
        handle_check(&self.config)
    }
}

#[tool_handler]
impl ServerHandler for GocqHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "gocq navigates from Go CQRS commands and queries to their handlers. \
                Use gocq_lenses to list declarations in a file, gocq_navigate to find a handler, \
                and gocq_check to audit the workspace for missing handlers."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
