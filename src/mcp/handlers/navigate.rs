//! Handler navigation

use crate::locate_in_workspace;
use crate::mcp::format::format_location;
use crate::mcp::types::NavigateRequest;
use crate::types::HandlerCandidates;
use crate::WorkspaceConfig;

pub fn handle_navigate(config: &WorkspaceConfig, req: &NavigateRequest) -> String {
    let candidates = match req.handler_names.as_slice() {
        [] => return "Error: no handler names given".to_string(),
        [single] => HandlerCandidates::new(single),
        names => HandlerCandidates::from_names(names.to_vec()),
    };

    match locate_in_workspace(config, &candidates) {
        Ok(Ok(location)) => format!(
            "Found handler at {}",
            format_location(&config.root, &location)
        ),
        Ok(Err(not_found)) => format!("Warning: {}", not_found),
        Err(e) => format!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace(files: &[(&str, &str)]) -> (tempfile::TempDir, WorkspaceConfig) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
        let root = dir.path().canonicalize().unwrap().display().to_string();
        (dir, WorkspaceConfig::with_root(root))
    }

    #[test]
    fn test_navigate_single_name_tries_lower_camel() {
        let (_dir, config) = workspace(&[(
            "user/handler.go",
            "package user\n\ntype getUserQueryHandler struct{}\n",
        )]);
        let output = handle_navigate(
            &config,
            &NavigateRequest {
                handler_names: vec!["GetUserQueryHandler".to_string()],
            },
        );
        assert_eq!(output, "Found handler at user/handler.go:3");
    }

    #[test]
    fn test_navigate_not_found() {
        let (_dir, config) = workspace(&[("a.go", "package a\n")]);
        let output = handle_navigate(
            &config,
            &NavigateRequest {
                handler_names: vec![
                    "PingQueryHandler".to_string(),
                    "pingQueryHandler".to_string(),
                ],
            },
        );
        assert_eq!(
            output,
            "Warning: Handler PingQueryHandler or pingQueryHandler not found."
        );
    }

    #[test]
    fn test_navigate_requires_names() {
        let (_dir, config) = workspace(&[]);
        let output = handle_navigate(
            &config,
            &NavigateRequest {
                handler_names: vec![],
            },
        );
        assert!(output.starts_with("Error:"));
    }
}
