//! Command implementations for CLI operations

use std::path::Path;

use anyhow::{Context, Result};

use crate::scanner::{handler_name_for, lenses};
use crate::types::{HandlerCandidates, Language};
use crate::{check_workspace, locate_in_workspace};

use super::workspace_utils::{relative_path, workspace_config};

/// List the navigable declarations in a single file
pub fn lenses_command(path: &str, json: bool) -> Result<()> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let lenses = lenses(&content, Language::from_extension(ext));

    if json {
        println!("{}", serde_json::to_string_pretty(&lenses)?);
        return Ok(());
    }

    if lenses.is_empty() {
        println!("No commands or queries found in {}", path);
        return Ok(());
    }

    println!("Found {} declarations in {}:\n", lenses.len(), path);
    for lens in &lenses {
        println!(
            "  {}:{} {} {} - {}",
            path,
            lens.line + 1,
            lens.kind.as_str(),
            lens.type_name,
            lens.title
        );
    }

    Ok(())
}

/// Locate the handler for a `FooCommand` / `FooQuery` type name
pub fn goto_command(type_name: &str, path: &str) -> Result<()> {
    let Some(handler) = handler_name_for(type_name) else {
        println!("'{}' is not a Command or Query type name", type_name);
        return Ok(());
    };

    find_command(&handler, path)
}

/// Locate a handler by name, trying its lower-camel variant as well
pub fn find_command(handler_name: &str, path: &str) -> Result<()> {
    let config = workspace_config(path)?;
    let candidates = HandlerCandidates::new(handler_name);

    match locate_in_workspace(&config, &candidates)? {
        Ok(location) => {
            println!(
                "{}:{}",
                relative_path(&config.root, &location.path),
                location.line + 1
            );
        }
        Err(err) => {
            eprintln!("Warning: {}", err);
        }
    }

    Ok(())
}

/// Report every command and query and whether its handler exists
pub fn check_command(path: &str) -> Result<()> {
    let config = workspace_config(path)?;
    let report = check_workspace(&config)?;

    if report.entries.is_empty() {
        println!("No commands or queries found in {} files", report.files);
        return Ok(());
    }

    println!("gocq Handler Check");
    println!("==================");
    println!("Files: {}", report.files);
    println!("Declarations: {}", report.entries.len());
    println!("Missing handlers: {}\n", report.missing_count());

    for entry in &report.entries {
        let decl = &entry.declaration;
        let site = format!(
            "{}:{}",
            relative_path(&config.root, &entry.path),
            decl.line + 1
        );
        match entry.handler {
            Some(ref loc) => println!(
                "  ok      {} {} -> {}:{}",
                site,
                decl.declared_name(),
                relative_path(&config.root, &loc.path),
                loc.line + 1
            ),
            None => println!(
                "  missing {} {} (expected {})",
                site,
                decl.declared_name(),
                decl.handler_name()
            ),
        }
    }

    Ok(())
}
