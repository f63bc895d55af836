//! MCP server initialization and startup
//!
//! Handles both stdio and HTTP transport modes for the MCP server.

use anyhow::Result;
use rmcp::{
    transport::stdio,
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
    },
    ServiceExt,
};
use tracing::{info, Level};

use gocq::cli::resolve_workspace_root;
use gocq::mcp::GocqHandler;
use gocq::WorkspaceConfig;

use crate::setup_logging;

fn server_config() -> Result<WorkspaceConfig> {
    let project_root = resolve_workspace_root()?;
    info!("Workspace root: {}", project_root);
    Ok(WorkspaceConfig::with_root(project_root))
}

/// Start MCP server with stdio transport
#[tokio::main]
pub async fn start_stdio() -> Result<()> {
    setup_logging(Level::DEBUG);
    info!("Starting gocq MCP server (stdio)");

    let handler = GocqHandler::new(server_config()?);
    let service = handler.serve(stdio()).await?;

    info!("MCP server running on stdio");
    service.waiting().await?;

    Ok(())
}

/// Start MCP server with HTTP transport
#[tokio::main]
pub async fn start_http(port: u16) -> Result<()> {
    setup_logging(Level::DEBUG);
    info!("Starting gocq MCP server (HTTP on port {})", port);

    let config = server_config()?;
    let cancellation_token = tokio_util::sync::CancellationToken::new();

    // Each session gets its own handler over the same workspace
    let service = StreamableHttpService::new(
        move || Ok(GocqHandler::new(config.clone())),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig {
            cancellation_token: cancellation_token.child_token(),
            ..Default::default()
        },
    );

    let router = axum::Router::new().nest_service("/mcp", service);

    let bind_addr = format!("127.0.0.1:{}", port);
    info!("Listening on http://{}/mcp", bind_addr);

    let tcp_listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(tcp_listener, router)
        .with_graceful_shutdown(async move {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down...");
            cancellation_token.cancel();
        })
        .await?;

    Ok(())
}
