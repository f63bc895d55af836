//! Workspace handler check

use crate::check_workspace;
use crate::mcp::format::format_location;
use crate::types::Location;
use crate::WorkspaceConfig;

pub fn handle_check(config: &WorkspaceConfig) -> String {
    let report = match check_workspace(config) {
        Ok(r) => r,
        Err(e) => return format!("Error: {}", e),
    };

    let mut output = String::from("## gocq Handler Check\n\n");
    output.push_str(&format!("**Files:** {}\n", report.files));
    output.push_str(&format!("**Declarations:** {}\n", report.entries.len()));
    output.push_str(&format!(
        "**Missing Handlers:** {}\n",
        report.missing_count()
    ));

    if report.missing_count() > 0 {
        output.push_str("\n### Missing:\n\n");
        for entry in report.missing() {
            let decl = &entry.declaration;
            let site = format_location(
                &config.root,
                &Location {
                    path: entry.path.clone(),
                    line: decl.line,
                },
            );
            output.push_str(&format!(
                "- `{}` ({}) - expected `{}`\n",
                decl.declared_name(),
                site,
                decl.handler_name()
            ));
        }
    }

    let found: Vec<_> = report
        .entries
        .iter()
        .filter_map(|e| e.handler.as_ref().map(|loc| (e, loc)))
        .collect();
    if !found.is_empty() {
        output.push_str("\n### Resolved:\n\n");
        for (entry, loc) in found {
            output.push_str(&format!(
                "- `{}` -> {}\n",
                entry.declaration.declared_name(),
                format_location(&config.root, loc)
            ));
        }
    }

    output
}
