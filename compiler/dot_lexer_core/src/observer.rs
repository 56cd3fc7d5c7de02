//! Optional observers for tracing the tokenizer.
//!
//! Rule matching never prints or logs. A driver run can instead be given a
//! [`LexObserver`] that is notified of each step.

use std::fmt::Debug;

use crate::{LexRule, LexicalError, Location, RuleMatch, Token};

/// Receives driver events. All methods default to doing nothing.
pub trait LexObserver<K> {
    /// A rule matched at `at`. Called for discard rules too.
    fn rule_matched(
        &mut self,
        _index: usize,
        _rule: &LexRule<K>,
        _m: &RuleMatch<'_, K>,
        _at: Location,
    ) {
    }

    /// A token was appended to the stream.
    fn token_emitted(&mut self, _token: &Token<K>) {}

    /// No rule matched; the run is about to fail.
    fn stalled(&mut self, _error: &LexicalError) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<K> LexObserver<K> for NoopObserver {}

/// Observer that forwards events to `tracing` at TRACE level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl<K: Copy + Debug> LexObserver<K> for TracingObserver {
    fn rule_matched(
        &mut self,
        index: usize,
        rule: &LexRule<K>,
        m: &RuleMatch<'_, K>,
        at: Location,
    ) {
        tracing::trace!(
            rule = index,
            pattern = %rule.pattern(),
            lexeme = m.lexeme,
            %at,
            "rule matched"
        );
    }

    fn token_emitted(&mut self, token: &Token<K>) {
        tracing::trace!(
            kind = ?token.kind,
            lexeme = %token.lexeme,
            line = token.line,
            col = token.col,
            "token emitted"
        );
    }

    fn stalled(&mut self, error: &LexicalError) {
        tracing::trace!(line = error.line, col = error.col, found = ?error.found, "stalled");
    }
}
