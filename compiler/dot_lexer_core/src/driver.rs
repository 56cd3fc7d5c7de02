//! The tokenizer loop.
//!
//! [`Tokens`] is a two-state machine (running, done). Each step asks the
//! rule table for the first match at the cursor, advances past it, and
//! yields a token if the rule has a kind. Every match is non-empty, so the
//! remaining text strictly shrinks and the loop terminates.
//!
//! When no rule matches, the iterator yields a single [`LexicalError`] for
//! the stalled location and is fused afterwards. There is no
//! resynchronization.

use std::sync::Arc;

use crate::{
    LexObserver, LexRule, LexicalError, Location, NoopObserver, RuleMatch, RuleTable,
    SourcePosition, Token, TokenizeError,
};

/// Lazy token stream over one source.
pub struct Tokens<'t, 'src, K, O = NoopObserver> {
    table: &'t RuleTable<K>,
    position: SourcePosition<'src>,
    observer: O,
    state: State,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Running,
    Done,
}

/// Outcome of one successful loop iteration.
enum Step<K> {
    Emitted(Token<K>),
    Discarded,
    Finished,
}

impl<'t, 'src, K: Copy> Tokens<'t, 'src, K> {
    pub fn new(table: &'t RuleTable<K>, position: SourcePosition<'src>) -> Self {
        Self::with_observer(table, position, NoopObserver)
    }
}

impl<'t, 'src, K: Copy, O: LexObserver<K>> Tokens<'t, 'src, K, O> {
    pub fn with_observer(
        table: &'t RuleTable<K>,
        position: SourcePosition<'src>,
        observer: O,
    ) -> Self {
        Self {
            table,
            position,
            observer,
            state: State::Running,
        }
    }

    /// The cursor as it stands between steps.
    pub fn position(&self) -> &SourcePosition<'src> {
        &self.position
    }

    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    fn step(&mut self) -> Result<Step<K>, TokenizeError> {
        if self.position.is_exhausted() {
            return Ok(Step::Finished);
        }

        let at = self.position.location();
        let Some((index, m)) = self.table.first_match(&self.position) else {
            let err = LexicalError {
                resource: Arc::clone(self.position.resource()),
                line: at.line,
                col: at.col,
                found: self.position.peek().chars().next().unwrap_or_default(),
            };
            self.observer.stalled(&err);
            return Err(err.into());
        };

        if let Some(rule) = self.table.get(index) {
            self.observer.rule_matched(index, rule, &m, at);
        }
        self.position.advance(m.char_len())?;

        let Some(kind) = m.kind else {
            return Ok(Step::Discarded);
        };
        let token = Token {
            kind,
            lexeme: m.lexeme.to_owned(),
            resource: Arc::clone(self.position.resource()),
            line: at.line,
            col: at.col,
        };
        self.observer.token_emitted(&token);
        Ok(Step::Emitted(token))
    }
}

impl<K: Copy, O: LexObserver<K>> Iterator for Tokens<'_, '_, K, O> {
    type Item = Result<Token<K>, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.state == State::Running {
            match self.step() {
                Ok(Step::Emitted(token)) => return Some(Ok(token)),
                Ok(Step::Discarded) => {}
                Ok(Step::Finished) => self.state = State::Done,
                Err(err) => {
                    // Fused: one error per run.
                    self.state = State::Done;
                    return Some(Err(err));
                }
            }
        }
        None
    }
}

impl<K: Copy, O: LexObserver<K>> std::iter::FusedIterator for Tokens<'_, '_, K, O> {}

impl<K, O: LexObserver<K> + ?Sized> LexObserver<K> for &mut O {
    fn rule_matched(
        &mut self,
        index: usize,
        rule: &LexRule<K>,
        m: &RuleMatch<'_, K>,
        at: Location,
    ) {
        (**self).rule_matched(index, rule, m, at);
    }

    fn token_emitted(&mut self, token: &Token<K>) {
        (**self).token_emitted(token);
    }

    fn stalled(&mut self, error: &LexicalError) {
        (**self).stalled(error);
    }
}

/// Tokenize a whole source, returning every token or the first error.
///
/// On error the tokens produced so far are discarded.
pub fn tokenize<K: Copy>(
    table: &RuleTable<K>,
    position: SourcePosition<'_>,
) -> Result<Vec<Token<K>>, TokenizeError> {
    tokenize_observed(table, position, &mut NoopObserver)
}

/// [`tokenize`] with an observer notified of every step.
#[tracing::instrument(level = "debug", skip_all, fields(resource = %position.resource()))]
pub fn tokenize_observed<K: Copy, O: LexObserver<K> + ?Sized>(
    table: &RuleTable<K>,
    position: SourcePosition<'_>,
    observer: &mut O,
) -> Result<Vec<Token<K>>, TokenizeError> {
    let tokens =
        Tokens::with_observer(table, position, observer).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}
