//! A single lexical rule: an anchored pattern and the terminal it produces.

use crate::{Pattern, SourcePosition};

/// Pattern plus optional terminal kind.
///
/// A rule without a kind is a discard rule: its match is consumed but no
/// token is emitted.
#[derive(Clone, Debug)]
pub struct LexRule<K> {
    pattern: Pattern,
    kind: Option<K>,
}

/// Successful rule match: the matched lexeme (never empty) and the rule's kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RuleMatch<'src, K> {
    pub lexeme: &'src str,
    pub kind: Option<K>,
}

impl<K> RuleMatch<'_, K> {
    /// Length of the lexeme in characters (the unit `SourcePosition::advance` takes).
    pub fn char_len(&self) -> usize {
        self.lexeme.chars().count()
    }
}

impl<K: Copy> LexRule<K> {
    /// A rule emitting `kind` for each match.
    pub fn token(pattern: Pattern, kind: K) -> Self {
        Self {
            pattern,
            kind: Some(kind),
        }
    }

    /// A rule whose matches are consumed silently.
    pub fn skip(pattern: Pattern) -> Self {
        Self {
            pattern,
            kind: None,
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn kind(&self) -> Option<K> {
        self.kind
    }

    pub fn is_discard(&self) -> bool {
        self.kind.is_none()
    }

    /// Test the pattern against the start of the remaining text.
    ///
    /// Pure: the position is not advanced.
    pub fn try_match<'src>(&self, position: &SourcePosition<'src>) -> Option<RuleMatch<'src, K>> {
        let text = position.peek();
        let len = self.pattern.match_prefix(text)?;
        Some(RuleMatch {
            lexeme: &text[..len],
            kind: self.kind,
        })
    }
}
