//! Workspace root resolution utilities

use std::env;
use std::path::Path;

use anyhow::{Context, Result};

use crate::WorkspaceConfig;

/// Environment variable naming the workspace root for server mode
pub const ROOT_ENV: &str = "GOCQ_ROOT";

/// Canonicalize and validate a path
pub fn canonicalize_path(path: &str) -> Result<String> {
    let canonical = Path::new(path)
        .canonicalize()
        .with_context(|| format!("Invalid path: {}", path))?;
    Ok(canonical.display().to_string())
}

/// Show a path relative to the workspace root when possible
pub fn relative_path<'a>(root: &str, path: &'a str) -> &'a str {
    Path::new(path)
        .strip_prefix(root)
        .ok()
        .and_then(|p| p.to_str())
        .unwrap_or(path)
}

/// Workspace configuration rooted at an existing directory
pub fn workspace_config(path: &str) -> Result<WorkspaceConfig> {
    Ok(WorkspaceConfig::with_root(canonicalize_path(path)?))
}

/// Resolve the workspace root from `GOCQ_ROOT` or the current directory
pub fn resolve_workspace_root() -> Result<String> {
    let root = env::var(ROOT_ENV)
        .or_else(|_| env::current_dir().map(|p| p.display().to_string()))
        .context("Could not determine workspace root")?;
    canonicalize_path(&root)
}
