//! Cursor over the unconsumed suffix of a source text.
//!
//! [`SourcePosition`] keeps a borrowed view of the text that has not been
//! tokenized yet, together with the 1-based line and column of its first
//! character. The view only ever shrinks from the front.
//!
//! `\n` and `\r` both end a line. A `\r\n` pair is one line break, also
//! when the pair is split across two calls to `advance`.

use std::fmt;
use std::sync::Arc;

use crate::OutOfBounds;

/// 1-based line and column of a character in the source.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    /// Location of the first character of a source.
    pub const START: Location = Location { line: 1, col: 1 };
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Remaining text plus the location of its first character.
#[derive(Clone, Debug)]
pub struct SourcePosition<'src> {
    remaining: &'src str,
    resource: Arc<str>,
    location: Location,
    /// The last consumed character was `\r`.
    after_cr: bool,
}

impl<'src> SourcePosition<'src> {
    /// Start a position at line 1, column 1 of `text`.
    ///
    /// `resource` names the source in diagnostics (usually a file path).
    pub fn new(text: &'src str, resource: impl Into<Arc<str>>) -> Self {
        Self {
            remaining: text,
            resource: resource.into(),
            location: Location::START,
            after_cr: false,
        }
    }

    /// Consume the first `n` characters of the remaining text.
    ///
    /// Line and column are updated by scanning exactly the consumed
    /// characters. On error nothing is consumed.
    pub fn advance(&mut self, n: usize) -> Result<(), OutOfBounds> {
        let split = match self.remaining.char_indices().nth(n) {
            Some((offset, _)) => offset,
            None => {
                let available = self.remaining.chars().count();
                if n > available {
                    return Err(OutOfBounds {
                        requested: n,
                        available,
                    });
                }
                self.remaining.len()
            }
        };

        let (consumed, rest) = self.remaining.split_at(split);
        self.track(consumed);
        self.remaining = rest;
        Ok(())
    }

    /// Update line/column for a consumed prefix.
    fn track(&mut self, consumed: &str) {
        let bytes = consumed.as_bytes();
        let mut last_break = None;
        // Line terminators are ASCII, so they never occur inside a
        // multi-byte UTF-8 sequence and the byte after one is a char boundary.
        for at in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            let prev_is_cr = match at.checked_sub(1) {
                Some(prev) => bytes[prev] == b'\r',
                None => self.after_cr,
            };
            let ends_crlf = bytes[at] == b'\n' && prev_is_cr;
            if !ends_crlf {
                self.location.line += 1;
            }
            last_break = Some(at);
        }
        match last_break {
            Some(last) => self.location.col = 1 + consumed[last + 1..].chars().count(),
            None => self.location.col += consumed.chars().count(),
        }
        if let Some(&last) = bytes.last() {
            self.after_cr = last == b'\r';
        }
    }

    /// The unconsumed text. Valid until the next `advance`.
    pub fn peek(&self) -> &'src str {
        self.remaining
    }

    /// Whether every character has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn resource(&self) -> &Arc<str> {
        &self.resource
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
