//! Rendering token streams and rule tables.

use std::io::{self, Write};

use dot_lexer::{DotRules, DotToken, TerminalKind};
use serde::Serialize;

/// One token as written to the JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    terminal: TerminalKind,
    resource: &'a str,
    line: usize,
    col: usize,
    source_string: &'a str,
}

impl<'a> From<&'a DotToken> for TokenRecord<'a> {
    fn from(token: &'a DotToken) -> Self {
        Self {
            terminal: token.kind,
            resource: &token.resource,
            line: token.line,
            col: token.col,
            source_string: &token.lexeme,
        }
    }
}

/// Write tokens as a pretty-printed JSON array.
pub fn write_json(out: &mut impl Write, tokens: &[DotToken]) -> io::Result<()> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)
}

/// Write one token per line: `line:col terminal "lexeme"`.
pub fn write_text(out: &mut impl Write, tokens: &[DotToken]) -> io::Result<()> {
    for token in tokens {
        writeln!(
            out,
            "{} {} {:?}",
            token.location(),
            token.kind,
            token.lexeme
        )?;
    }
    Ok(())
}

/// Write the rule table in priority order.
pub fn write_rules(out: &mut impl Write, rules: &DotRules) -> io::Result<()> {
    for (index, rule) in rules.iter().enumerate() {
        let kind = rule.kind().map_or("(discard)", TerminalKind::name);
        let boundary = if rule.pattern().has_boundary() {
            "  [boundary]"
        } else {
            ""
        };
        writeln!(out, "{index:>2}  {kind:<12} {}{boundary}", rule.pattern())?;
    }
    Ok(())
}
