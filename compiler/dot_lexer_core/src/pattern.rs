//! Anchored patterns.
//!
//! Every [`Pattern`] is compiled as `^(?:...)`, so it can only match a
//! prefix of the text it is given. The `regex` crate has no lookaround, so
//! the "not followed by" check that keyword rules need is expressed as a
//! separate boundary predicate tested on the character after the match.
//!
//! Patterns that accept the empty string are rejected at construction: an
//! empty match would let the driver loop without consuming input.

use std::fmt;

use regex::Regex;

use crate::PatternError;

/// A prefix-only pattern with an optional trailing boundary.
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
    /// The match is rejected if the next character satisfies this predicate.
    not_followed_by: Option<fn(char) -> bool>,
}

impl Pattern {
    /// Compile a regular expression, anchored at the start of the text.
    pub fn regex(source: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("^(?:{source})"))?;
        if regex.is_match("") {
            return Err(PatternError::MatchesEmpty {
                pattern: source.to_owned(),
            });
        }
        Ok(Self {
            regex,
            not_followed_by: None,
        })
    }

    /// A pattern matching exactly `text`.
    pub fn literal(text: &str) -> Result<Self, PatternError> {
        Self::regex(&regex::escape(text))
    }

    /// Reject matches immediately followed by a character satisfying `boundary`.
    #[must_use]
    pub fn not_followed_by(mut self, boundary: fn(char) -> bool) -> Self {
        self.not_followed_by = Some(boundary);
        self
    }

    /// The anchored regular expression source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether a boundary predicate is attached.
    pub fn has_boundary(&self) -> bool {
        self.not_followed_by.is_some()
    }

    /// Length in bytes of the non-empty prefix of `text` this pattern matches.
    pub fn match_prefix(&self, text: &str) -> Option<usize> {
        let m = self.regex.find(text)?;
        if m.start() != 0 || m.is_empty() {
            return None;
        }
        if let Some(boundary) = self.not_followed_by {
            if text[m.end()..].chars().next().is_some_and(boundary) {
                return None;
            }
        }
        Some(m.end())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("regex", &self.regex.as_str())
            .field("boundary", &self.has_boundary())
            .finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.regex.as_str())
    }
}
