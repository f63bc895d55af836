//! CLI command implementations
//!
//! Handles all command-line interface operations:
//! - lenses: List navigable declarations in a Go file
//! - goto: Find the handler for a command or query type
//! - find: Find a handler by name
//! - check: Report commands/queries without a handler

mod commands;
mod workspace_utils;

pub use commands::*;
pub use workspace_utils::*;
