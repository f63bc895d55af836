//! gocq: jump from Go CQRS commands and queries to their handlers
//!
//! Scans Go source for `XxxCommand` / `XxxQuery` struct declarations and
//! locates the matching `XxxCommandHandler` / `XxxQueryHandler` struct in the
//! workspace. Matching is line-oriented regex work; there is no Go parser.
//!
//! ## Features
//!
//! - Declaration scanning, generic parameter lists included
//! - Handler lookup in exported and lower-camel form
//! - Workspace audit of commands and queries without a handler
//!
//! ## MCP Tools
//!
//! - `gocq_lenses` - List navigable declarations in a Go file
//! - `gocq_navigate` - Locate a handler by name
//! - `gocq_check` - Report commands/queries missing a handler

pub mod cli;
pub mod locator;
pub mod mcp;
pub mod scanner;
pub mod types;

use std::path::{Path, PathBuf};

use anyhow::Result;
use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use locator::LocateError;
use types::{Declaration, HandlerCandidates, Location, SourceFile};

/// Which files of a workspace take part in a lookup
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    /// Root directory to search
    pub root: String,
    /// File extensions to include
    pub extensions: Vec<String>,
    /// Directories to exclude
    pub exclude_dirs: Vec<String>,
    /// Whether to follow gitignore rules
    pub respect_gitignore: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            extensions: vec!["go".to_string()],
            // Build output directories are left to .gitignore
            exclude_dirs: vec![".git".to_string(), "vendor".to_string()],
            respect_gitignore: true,
        }
    }
}

impl WorkspaceConfig {
    pub fn with_root(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }
}

/// Enumerate the Go files under the configured root, sorted by path
pub fn discover_go_files(config: &WorkspaceConfig) -> Result<Vec<PathBuf>> {
    let root = Path::new(&config.root).canonicalize()?;
    debug!("Discovering Go files under {}", root.display());

    let mut walker = WalkBuilder::new(&root);
    walker
        .hidden(false)
        .git_ignore(config.respect_gitignore)
        .git_global(config.respect_gitignore)
        .git_exclude(config.respect_gitignore);

    let mut files = Vec::new();
    for entry in walker.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!("Error walking directory: {}", err);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !config.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
            continue;
        }

        // Excluded directories only count below the root
        let rel = path.strip_prefix(&root).unwrap_or(path);
        let excluded = rel.components().any(|c| {
            config
                .exclude_dirs
                .iter()
                .any(|d| c.as_os_str() == d.as_str())
        });
        if excluded {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    debug!("Discovered {} Go files", files.len());
    Ok(files)
}

/// Read every path into a file set, skipping the ones that can't be read
pub fn load_sources(paths: &[PathBuf]) -> Vec<SourceFile> {
    paths
        .iter()
        .filter_map(|path| match std::fs::read_to_string(path) {
            Ok(content) => Some(SourceFile::new(path.display().to_string(), content)),
            Err(err) => {
                debug!("Failed to read {}: {}", path.display(), err);
                None
            }
        })
        .collect()
}

/// Discover, read and search the workspace for one of the candidates.
///
/// Files are re-read on every call.
pub fn locate_in_workspace(
    config: &WorkspaceConfig,
    candidates: &HandlerCandidates,
) -> Result<std::result::Result<Location, LocateError>> {
    info!("Looking for handlers: {}", candidates.names().join(", "));
    let paths = discover_go_files(config)?;
    let sources = load_sources(&paths);
    Ok(locator::locate(candidates, &sources))
}

/// A declaration found during a workspace check
#[derive(Debug, Clone)]
pub struct CheckEntry {
    pub path: String,
    pub declaration: Declaration,
    pub handler: Option<Location>,
}

/// Outcome of checking every command and query in a workspace
#[derive(Debug, Default)]
pub struct CheckReport {
    pub files: u64,
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    pub fn missing(&self) -> impl Iterator<Item = &CheckEntry> {
        self.entries.iter().filter(|e| e.handler.is_none())
    }

    pub fn missing_count(&self) -> usize {
        self.missing().count()
    }
}

/// Scan every Go file for declarations and locate each handler
pub fn check_workspace(config: &WorkspaceConfig) -> Result<CheckReport> {
    let paths = discover_go_files(config)?;
    let sources = load_sources(&paths);
    info!("Checking {} Go files", sources.len());

    let mut report = CheckReport {
        files: sources.len() as u64,
        ..Default::default()
    };

    for source in &sources {
        for declaration in scanner::scan(&source.content) {
            let handler = locator::locate(&declaration.candidates(), &sources).ok();
            report.entries.push(CheckEntry {
                path: source.path.clone(),
                declaration,
                handler,
            });
        }
    }

    info!(
        "Found {} declarations, {} without a handler",
        report.entries.len(),
        report.missing_count()
    );

    Ok(report)
}
