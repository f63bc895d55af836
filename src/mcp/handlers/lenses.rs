//! Lens listing handler

use std::path::Path;

use crate::mcp::format::{format_lens_list_item, normalize_path};
use crate::mcp::types::LensesRequest;
use crate::scanner::lenses;
use crate::types::Language;

pub fn handle_lenses(project_root: &str, req: &LensesRequest) -> String {
    let path = normalize_path(&req.path);
    let full_path = Path::new(project_root).join(path);

    let content = match std::fs::read_to_string(&full_path) {
        Ok(c) => c,
        Err(e) => return format!("Error: could not read '{}': {}", path, e),
    };

    let language = match req.language.as_deref() {
        Some(id) => Language::from_id(id),
        None => Language::from_extension(
            full_path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or(""),
        ),
    };
    let lenses = lenses(&content, language);

    if lenses.is_empty() {
        return format!("No commands or queries found in '{}'", path);
    }

    let mut output = format!("## Declarations in `{}`\n\n", path);
    output.push_str(&format!("Found {} declarations:\n\n", lenses.len()));

    for lens in &lenses {
        output.push_str(&format_lens_list_item(lens));
    }

    output
}
