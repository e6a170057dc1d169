//! Parser for definition replies.
//!
//! The enrichment endpoint is asked to answer in the shape:
//!
//! ```text
//! Definition: ...
//! Examples:
//! 1. ...
//! 2. ...
//! ```
//!
//! The reply is untrusted text, so parsing is best-effort: when the markers
//! are missing the first line stands in for the definition and the
//! remaining non-empty lines stand in for the examples. Only an empty reply
//! is a hard error.

use crate::error::{ParseError, Result};

/// Definition and example sentences extracted from a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDetails {
    pub definition: String,
    pub examples: Vec<String>,
}

/// Parse a loosely structured definition reply.
pub fn parse_reply(content: &str) -> Result<WordDetails> {
    if content.trim().is_empty() {
        return Err(ParseError::EmptyReply);
    }

    let mut definition = String::new();
    let mut examples = Vec::new();
    let mut in_examples = false;

    for line in content.lines() {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();

        if definition.is_empty() && lower.starts_with("definition:") {
            definition = trimmed["definition:".len()..].trim().to_string();
            continue;
        }
        if lower.starts_with("examples:") {
            in_examples = true;
            continue;
        }
        if in_examples {
            if let Some(example) = strip_list_number(trimmed) {
                examples.push(example);
            }
        }
    }

    if definition.is_empty() {
        definition = content
            .lines()
            .next()
            .map(|l| l.trim().to_string())
            .unwrap_or_default();
    }
    if examples.is_empty() && content.contains('\n') {
        examples = content
            .lines()
            .skip(1)
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
    }

    if definition.is_empty() {
        return Err(ParseError::MissingDefinition);
    }

    Ok(WordDetails {
        definition,
        examples,
    })
}

/// Strip a leading "N." marker; returns None for lines that are not
/// numbered list items or carry no text after the marker.
fn strip_list_number(line: &str) -> Option<String> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    let text = rest.strip_prefix('.')?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
