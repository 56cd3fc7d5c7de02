//! Emitted tokens.

use std::sync::Arc;

use crate::Location;

/// A terminal produced by a kinded rule.
///
/// `line`/`col` are the location of the first character of `lexeme`,
/// i.e. the position before the match was consumed.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token<K> {
    pub kind: K,
    pub lexeme: String,
    pub resource: Arc<str>,
    pub line: usize,
    pub col: usize,
}

impl<K> Token<K> {
    pub fn location(&self) -> Location {
        Location {
            line: self.line,
            col: self.col,
        }
    }
}
