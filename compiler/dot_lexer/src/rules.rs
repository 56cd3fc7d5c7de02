//! The DOT rule table.
//!
//! Order is significant and matches the grammar:
//!
//! 1. keywords, each rejected when followed by an identifier character
//!    (so `graph1` is an identifier, not `graph` + `1`)
//! 2. two-character punctuation (`--`, `->`)
//! 3. single-character punctuation
//! 4. the identifier catch-all (IDs, quoted strings, numerals)
//! 5. whitespace, discarded
//!
//! Keywords are case-sensitive.

use dot_lexer_core::{LexRule, Pattern, PatternError, RuleTable};

use crate::TerminalKind;

const KEYWORDS: [(&str, TerminalKind); 6] = [
    ("digraph", TerminalKind::Digraph),
    ("graph", TerminalKind::Graph),
    ("subgraph", TerminalKind::Subgraph),
    ("strict", TerminalKind::Strict),
    ("edge", TerminalKind::Edge),
    ("node", TerminalKind::Node),
];

const PUNCTUATION: [(&str, TerminalKind); 10] = [
    ("--", TerminalKind::DashDash),
    ("->", TerminalKind::Arrow),
    (";", TerminalKind::Semi),
    ("{", TerminalKind::LBrace),
    ("}", TerminalKind::RBrace),
    ("[", TerminalKind::LSquare),
    ("]", TerminalKind::RSquare),
    (",", TerminalKind::Comma),
    (":", TerminalKind::Colon),
    ("=", TerminalKind::Assign),
];

/// Identifier catch-all. Three alternatives share one terminal:
///
/// - unquoted ID: letters, `_`, and U+0200..=U+0377, then also digits
/// - quoted string: shortest run up to the next `"`; a backslash does not
///   escape it, so `"a\"b"` lexes as `"a\"` then `b"`
/// - numeral: `-?(.digits | digits(.digits*)?)`; `1.2.3` is not rejected,
///   it lexes as `1.2` then `.3`
const IDENTIFIER: &str = concat!(
    r"[a-zA-Z\x{0200}-\x{0377}_][0-9a-zA-Z\x{0200}-\x{0377}_]*",
    r#"|"[^"]*?""#,
    r"|-?(?:\.[0-9]+|[0-9]+(?:\.[0-9]*)?)",
);

const WHITESPACE: &str = r"[ \t\n\x0B\x0C\r]+";

/// Characters that may continue an unquoted identifier.
pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ('\u{0200}'..='\u{0377}').contains(&c)
}

/// Build the DOT rule table.
///
/// Build once and share: the table holds no per-run state.
pub fn dot_rules() -> Result<RuleTable<TerminalKind>, PatternError> {
    let mut rules = Vec::with_capacity(KEYWORDS.len() + PUNCTUATION.len() + 2);

    for (word, kind) in KEYWORDS {
        let pattern = Pattern::literal(word)?.not_followed_by(is_identifier_continue);
        rules.push(LexRule::token(pattern, kind));
    }
    for (symbol, kind) in PUNCTUATION {
        rules.push(LexRule::token(Pattern::literal(symbol)?, kind));
    }
    rules.push(LexRule::token(
        Pattern::regex(IDENTIFIER)?,
        TerminalKind::Identifier,
    ));
    rules.push(LexRule::skip(Pattern::regex(WHITESPACE)?));

    Ok(RuleTable::new(rules))
}

#[cfg(test)]
mod tests;
