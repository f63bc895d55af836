//! Core type definitions for gocq
//!
//! Defines the values passed between the scanner, the locator and the hosts:
//! - Declarations: `XxxCommand` / `XxxQuery` structs found in a buffer
//! - Candidates: handler names to try, in order
//! - Locations and lenses handed back to the host

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the navigation action attached to every lens
pub const NAVIGATE_COMMAND: &str = "gocq.navigateToHandler";

/// Which CQRS message a struct declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Command,
    Query,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Command => "command",
            DeclarationKind::Query => "query",
        }
    }

    /// Type-name suffix that marks this kind (`Command`, `Query`)
    pub fn suffix(&self) -> &'static str {
        match self {
            DeclarationKind::Command => "Command",
            DeclarationKind::Query => "Query",
        }
    }

    /// Suffix appended to the base name to get the handler type
    pub fn handler_suffix(&self) -> &'static str {
        match self {
            DeclarationKind::Command => "CommandHandler",
            DeclarationKind::Query => "QueryHandler",
        }
    }
}

/// Languages the host may report for a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "go" => Language::Go,
            _ => Language::Unknown,
        }
    }

    /// Map an editor language id (`"go"`, `"rust"`, ...) to a language
    pub fn from_id(id: &str) -> Self {
        match id {
            "go" => Language::Go,
            _ => Language::Unknown,
        }
    }
}

/// A command or query struct declaration found in a buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub kind: DeclarationKind,
    /// Base name, without the kind suffix or generic parameters
    pub type_name: String,
    /// 0-based line of the declaration
    pub line: usize,
}

impl Declaration {
    /// The name as written in the source, e.g. `CreateUserCommand`
    pub fn declared_name(&self) -> String {
        format!("{}{}", self.type_name, self.kind.suffix())
    }

    /// The handler struct expected for this declaration
    pub fn handler_name(&self) -> String {
        format!("{}{}", self.type_name, self.kind.handler_suffix())
    }

    pub fn candidates(&self) -> HandlerCandidates {
        HandlerCandidates::new(&self.handler_name())
    }
}

/// Handler names to search for, exported form first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandlerCandidates(Vec<String>);

impl HandlerCandidates {
    /// Build the exported name and its lower-camel variant.
    /// The variant is dropped when it equals the original.
    pub fn new(handler_name: &str) -> Self {
        let mut names = vec![handler_name.to_string()];
        let lower = lower_first(handler_name);
        if lower != handler_name {
            names.push(lower);
        }
        Self(names)
    }

    /// Take candidates verbatim, as received from a host
    pub fn from_names(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// `A or B`, as shown in the not-found warning
    pub fn joined(&self) -> String {
        self.0.join(" or ")
    }
}

/// Lowercase the first character, leaving the rest untouched
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One file of the set the locator searches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Where a handler was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    /// 0-based line of the handler declaration
    pub line: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line + 1)
    }
}

/// Inline annotation offered to the host for a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lens {
    pub kind: DeclarationKind,
    pub type_name: String,
    pub line: usize,
    pub title: String,
    pub command: String,
    pub arguments: HandlerCandidates,
}

impl Lens {
    pub fn for_declaration(decl: &Declaration) -> Self {
        let handler = decl.handler_name();
        Self {
            kind: decl.kind,
            type_name: decl.type_name.clone(),
            line: decl.line,
            title: format!("➜ Go to {}", handler),
            command: NAVIGATE_COMMAND.to_string(),
            arguments: HandlerCandidates::new(&handler),
        }
    }
}
