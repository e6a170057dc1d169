//! Error types for journal-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a definition reply.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty reply")]
    EmptyReply,

    #[error("no definition found in reply")]
    MissingDefinition,
}
