//! Lexer for the Graphviz DOT language.
//!
//! Builds the DOT rule table on top of `dot_lexer_core` and provides the
//! entry points a parser needs: [`lex`] for text already in memory and
//! [`lex_file`] for a path plus encoding.
//!
//! ```text
//! path --SourceText::load--> text --lex--> Vec<DotToken>
//! ```

mod rules;
mod source;
mod terminal;

use std::path::Path;

use dot_lexer_core::tokenize_observed;

pub use dot_lexer_core::{
    LexObserver, LexicalError, Location, NoopObserver, PatternError, RuleTable, SourcePosition,
    Token, TokenizeError, Tokens, TracingObserver,
};
pub use rules::{dot_rules, is_identifier_continue};
pub use source::{SourceError, SourceText, TextEncoding};
pub use terminal::TerminalKind;

/// A token of the DOT language.
pub type DotToken = Token<TerminalKind>;

/// The DOT rule table type.
pub type DotRules = RuleTable<TerminalKind>;

/// Failure of [`lex_file`]: either the source could not be obtained or it
/// could not be tokenized.
#[derive(Debug, thiserror::Error)]
pub enum DotLexError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}

/// Tokenize an in-memory source.
pub fn lex(source: &SourceText, rules: &DotRules) -> Result<Vec<DotToken>, TokenizeError> {
    lex_observed(source, rules, &mut NoopObserver)
}

/// [`lex`] with an observer receiving every driver step.
pub fn lex_observed<O: LexObserver<TerminalKind> + ?Sized>(
    source: &SourceText,
    rules: &DotRules,
    observer: &mut O,
) -> Result<Vec<DotToken>, TokenizeError> {
    tokenize_observed(rules, source.position(), observer)
}

/// Load, decode, and tokenize a file.
pub fn lex_file(
    path: &Path,
    encoding: TextEncoding,
    rules: &DotRules,
) -> Result<Vec<DotToken>, DotLexError> {
    let source = SourceText::load(path, encoding)?;
    Ok(lex(&source, rules)?)
}
