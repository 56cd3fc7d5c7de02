//! Error types for rule construction and tokenization.
//!
//! A tokenization run fails with at most one error. There is no recovery:
//! the first stall ends the run.

use std::sync::Arc;

/// No rule in the table matches the remaining text.
///
/// Carries the location of the stalled cursor and the character found
/// there, for diagnostics.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{resource}:{line}:{col}: no lexical rule matches at {found:?}")]
pub struct LexicalError {
    pub resource: Arc<str>,
    pub line: usize,
    pub col: usize,
    pub found: char,
}

/// `advance` was asked to consume more characters than remain.
///
/// Indicates a bug in match-length computation, never bad input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("cannot advance {requested} characters: only {available} remain")]
pub struct OutOfBounds {
    pub requested: usize,
    pub available: usize,
}

/// Failure of a single tokenization run.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TokenizeError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    #[error("internal lexer error: {0}")]
    OutOfBounds(#[from] OutOfBounds),
}

impl TokenizeError {
    /// The lexical error, if this is a stall rather than a contract violation.
    pub fn as_lexical(&self) -> Option<&LexicalError> {
        match self {
            Self::Lexical(err) => Some(err),
            Self::OutOfBounds(_) => None,
        }
    }
}

/// A pattern that cannot be used as a lexical rule.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The regular expression failed to compile.
    #[error("invalid pattern: {0}")]
    Invalid(#[from] regex::Error),
    /// The pattern accepts the empty string, so a match could make no progress.
    #[error("pattern `{pattern}` matches the empty string")]
    MatchesEmpty { pattern: String },
}
