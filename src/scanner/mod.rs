//! Declaration scanner
//!
//! Finds `type XxxCommand struct` and `type XxxQuery struct` declarations
//! line by line and turns them into lenses the host can render.
//! Generic parameter lists (`[T any, K ~string]`) are matched but never
//! become part of the type name.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::types::{Declaration, DeclarationKind, Language, Lens};

fn command_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\btype\s+(\w+)Command(?:\[.*\])?\s+struct\b")
            .expect("command pattern is valid")
    })
}

fn query_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\btype\s+(\w+)Query(?:\[.*\])?\s+struct\b").expect("query pattern is valid")
    })
}

fn match_kind(kind: DeclarationKind, line: &str) -> Option<String> {
    let re = match kind {
        DeclarationKind::Command => command_regex(),
        DeclarationKind::Query => query_regex(),
    };
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Scan a buffer for command and query struct declarations.
///
/// Results follow line order; a line yields at most one declaration per kind.
pub fn scan(text: &str) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    for (line, content) in text.lines().enumerate() {
        // Cheap prefilter, most lines never mention a type
        if !content.contains("type") {
            continue;
        }
        for kind in [DeclarationKind::Command, DeclarationKind::Query] {
            if let Some(type_name) = match_kind(kind, content) {
                declarations.push(Declaration {
                    kind,
                    type_name,
                    line,
                });
            }
        }
    }

    declarations
}

/// Build one lens per declaration, or none if the buffer isn't Go
pub fn lenses(text: &str, language: Language) -> Vec<Lens> {
    if language != Language::Go {
        return Vec::new();
    }

    let lenses: Vec<Lens> = scan(text).iter().map(Lens::for_declaration).collect();
    debug!("Found {} lenses", lenses.len());
    lenses
}

/// Split a declared name such as `FooCommand[T any]` into its kind and base name.
///
/// Only an exact trailing `Command` / `Query` counts; the base must be non-empty.
pub fn parse_declared_name(name: &str) -> Option<(DeclarationKind, String)> {
    let name = match name.find('[') {
        Some(idx) => &name[..idx],
        None => name,
    }
    .trim();

    [DeclarationKind::Command, DeclarationKind::Query]
        .into_iter()
        .find_map(|kind| {
            name.strip_suffix(kind.suffix())
                .filter(|base| !base.is_empty())
                .map(|base| (kind, base.to_string()))
        })
}

/// Handler name for a declared command or query name
pub fn handler_name_for(name: &str) -> Option<String> {
    parse_declared_name(name).map(|(kind, base)| format!("{}{}", base, kind.handler_suffix()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_command_struct() {
        let code = r#"
package test

type CreateUserCommand struct {
	Name string
}
"#;
        let decls = scan(code);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].kind, DeclarationKind::Command);
        assert_eq!(decls[0].type_name, "CreateUser");
        assert_eq!(decls[0].line, 3);
        assert_eq!(decls[0].handler_name(), "CreateUserCommandHandler");
    }

    #[test]
    fn test_scan_query_struct() {
        let decls = scan("type GetUserQuery struct {\n\tID string\n}\n");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].kind, DeclarationKind::Query);
        assert_eq!(decls[0].type_name, "GetUser");
        assert_eq!(decls[0].line, 0);
        assert_eq!(decls[0].handler_name(), "GetUserQueryHandler");
    }

    #[test]
    fn test_any_base_name_is_captured() {
        for name in ["A", "Foo", "foo", "Create_User2", "X9"] {
            let decls = scan(&format!("type {}Command struct", name));
            assert_eq!(decls.len(), 1, "{}", name);
            assert_eq!(decls[0].type_name, name);
            assert_eq!(decls[0].line, 0);
        }
    }

    #[test]
    fn test_generic_parameters_are_stripped() {
        let code = "type CreateUserGenericCommand[T, U any, K ~string] struct {\n}\n";
        let decls = scan(code);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].type_name, "CreateUserGeneric");
        assert_eq!(decls[0].handler_name(), "CreateUserGenericCommandHandler");

        let decls = scan("type GetUserGenericQuery[T any] struct {");
        assert_eq!(decls[0].handler_name(), "GetUserGenericQueryHandler");

        let decls = scan("type FooCommand[T any] struct{}");
        assert_eq!(decls[0].type_name, "Foo");
    }

    #[test]
    fn test_nested_brackets_in_constraints() {
        let decls = scan("type ListQuery[T interface{ ~[]int }] struct {");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].type_name, "List");
    }

    #[test]
    fn test_handler_structs_are_not_declarations() {
        let code = r#"
type CreateUserCommandHandler struct {
	repository Repository
}

type CreateUserGenericCommandHandler[T ~int, K string] struct {
	repository Repository[T, K]
}

type GetUserQueryHandler struct{}
"#;
        assert!(scan(code).is_empty());
    }

    #[test]
    fn test_suffix_must_be_trailing() {
        assert!(scan("type CommandBus struct {").is_empty());
        assert!(scan("type QueryOptions struct {").is_empty());
        assert!(scan("type Command struct {").is_empty());

        let decls = scan("type CommandBusQuery struct {");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].kind, DeclarationKind::Query);
        assert_eq!(decls[0].type_name, "CommandBus");
        assert_eq!(decls[0].handler_name(), "CommandBusQueryHandler");
    }

    #[test]
    fn test_only_last_suffix_is_stripped() {
        let decls = scan("type RetryCommandCommand struct {");
        assert_eq!(decls[0].type_name, "RetryCommand");
        assert_eq!(decls[0].handler_name(), "RetryCommandCommandHandler");
    }

    #[test]
    fn test_non_struct_types_are_ignored() {
        let code = "type CreateUserCommand interface {\n}\ntype GetUserQuery = other.Query\n";
        assert!(scan(code).is_empty());
    }

    #[test]
    fn test_multiple_declarations_in_line_order() {
        let code = r#"package app

type CreateOrderCommand struct{}

type GetOrderQuery struct{}
type CancelOrderCommand struct{}
type CreateOrderCommand struct{}
"#;
        let decls = scan(code);
        let summary: Vec<_> = decls
            .iter()
            .map(|d| (d.kind, d.type_name.as_str(), d.line))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DeclarationKind::Command, "CreateOrder", 2),
                (DeclarationKind::Query, "GetOrder", 4),
                (DeclarationKind::Command, "CancelOrder", 5),
                (DeclarationKind::Command, "CreateOrder", 6),
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let decls = scan("package a\r\n\r\ntype PingQuery struct {}\r\n");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].line, 2);
        assert_eq!(decls[0].type_name, "Ping");
    }

    #[test]
    fn test_non_go_text_yields_nothing() {
        assert!(scan("").is_empty());
        assert!(scan("struct CreateUserCommand { name: String }").is_empty());
        assert!(scan("class GetUserQuery {}").is_empty());
    }

    #[test]
    fn test_lenses_for_go() {
        let lenses = lenses("type CreateUserCommand struct {}", Language::Go);
        assert_eq!(lenses.len(), 1);
        assert_eq!(lenses[0].title, "➜ Go to CreateUserCommandHandler");
        assert_eq!(
            lenses[0].arguments.names(),
            &["CreateUserCommandHandler", "createUserCommandHandler"]
        );
    }

    #[test]
    fn test_lenses_skip_other_languages() {
        assert!(lenses("type CreateUserCommand struct {}", Language::Unknown).is_empty());
    }

    #[test]
    fn test_handler_name_for() {
        assert_eq!(
            handler_name_for("FooCommand").as_deref(),
            Some("FooCommandHandler")
        );
        assert_eq!(
            handler_name_for("CreateUserGenericCommand[T, U any, K ~string]").as_deref(),
            Some("CreateUserGenericCommandHandler")
        );
        assert_eq!(
            handler_name_for("GetUserQuery").as_deref(),
            Some("GetUserQueryHandler")
        );
        assert_eq!(
            handler_name_for("CommandBusQuery").as_deref(),
            Some("CommandBusQueryHandler")
        );
        assert_eq!(handler_name_for("CommandBus"), None);
        assert_eq!(handler_name_for("Command"), None);
    }
}
