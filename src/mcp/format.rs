//! Shared formatting utilities for MCP tool outputs

use crate::cli::relative_path;
use crate::types::{Lens, Location};

/// Format a lens as a list item with its line and the names it will try
pub fn format_lens_list_item(lens: &Lens) -> String {
    format!(
        "- line {}: **{}** `{}` - {} (tries {})\n",
        lens.line + 1,
        lens.kind.as_str(),
        lens.type_name,
        lens.title,
        lens.arguments.joined()
    )
}

/// Format a handler location relative to the workspace root
pub fn format_location(root: &str, location: &Location) -> String {
    format!(
        "{}:{}",
        relative_path(root, &location.path),
        location.line + 1
    )
}

/// Normalize file path (remove leading ./)
pub fn normalize_path(path: &str) -> &str {
    path.trim_start_matches("./")
}
