//! Handler locator
//!
//! Searches a file set for the first `type <Handler> struct` declaration
//! matching one of the candidate names. The first letter of each candidate
//! matches case-insensitively, the rest exactly.

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{HandlerCandidates, Location, SourceFile};

/// The single way a lookup can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("Handler {} not found.", .names.join(" or "))]
    HandlerNotFound { names: Vec<String> },
}

/// Build the declaration pattern for one handler name
pub fn handler_pattern(name: &str) -> Option<Regex> {
    let mut chars = name.chars();
    let first = chars.next()?;
    let rest: String = chars.collect();

    let pattern = format!(
        r"\btype\s+(?i:{}){}(?:\[.*\])?\s+struct\b",
        regex::escape(&first.to_string()),
        regex::escape(&rest)
    );

    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            warn!("Skipping handler candidate {}: {}", name, err);
            None
        }
    }
}

/// First line of `content` declaring the handler, if any
fn find_line(re: &Regex, content: &str) -> Option<usize> {
    content.lines().position(|line| re.is_match(line))
}

/// Find the first file declaring one of the candidates.
///
/// Candidates are tried in order; for each one the files are scanned in the
/// order given. Returns as soon as anything matches.
pub fn locate(
    candidates: &HandlerCandidates,
    files: &[SourceFile],
) -> Result<Location, LocateError> {
    for name in candidates.names() {
        debug!("Searching for handler: {}", name);
        let Some(re) = handler_pattern(name) else {
            continue;
        };

        for file in files {
            if let Some(line) = find_line(&re, &file.content) {
                debug!("Found handler {} in {}", name, file.path);
                return Ok(Location {
                    path: file.path.clone(),
                    line,
                });
            }
        }
    }

    debug!("Handler not found: {}", candidates.joined());
    Err(LocateError::HandlerNotFound {
        names: candidates.names().to_vec(),
    })
}
