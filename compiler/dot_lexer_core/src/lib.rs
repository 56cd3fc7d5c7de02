//! Low-level rule-table tokenizer.
//!
//! A [`RuleTable`] is an ordered list of [`LexRule`]s. Each rule pairs an
//! anchored [`Pattern`] with an optional terminal kind. The driver
//! ([`Tokens`] / [`tokenize`]) repeatedly asks the table for the first rule
//! that matches at the cursor, advances the [`SourcePosition`] past the
//! match, and emits a [`Token`] when the rule carries a kind.
//!
//! Priority is table order, not match length. A rule without a kind is a
//! discard rule (whitespace and the like).
//!
//! This crate knows nothing about any particular grammar: the terminal kind
//! is a type parameter `K`. The DOT rule table lives in `dot_lexer`.

mod driver;
mod error;
mod observer;
mod pattern;
mod position;
mod rule;
mod table;
mod token;

pub use driver::{tokenize, tokenize_observed, Tokens};
pub use error::{LexicalError, OutOfBounds, PatternError, TokenizeError};
pub use observer::{LexObserver, NoopObserver, TracingObserver};
pub use pattern::Pattern;
pub use position::{Location, SourcePosition};
pub use rule::{LexRule, RuleMatch};
pub use table::RuleTable;
pub use token::Token;
