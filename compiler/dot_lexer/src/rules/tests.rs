use super::*;
use dot_lexer_core::SourcePosition;
use pretty_assertions::assert_eq;

fn first(src: &str) -> Option<(TerminalKind, String)> {
    let table = dot_rules().unwrap();
    let pos = SourcePosition::new(src, "t");
    let (_, m) = table.first_match(&pos)?;
    Some((m.kind?, m.lexeme.to_owned()))
}

fn ident(lexeme: &str) -> Option<(TerminalKind, String)> {
    Some((TerminalKind::Identifier, lexeme.to_owned()))
}

// === Table shape ===

#[test]
fn table_order_is_keywords_punctuation_identifier_whitespace() {
    let table = dot_rules().unwrap();
    let kinds: Vec<_> = table.iter().map(LexRule::kind).collect();
    assert_eq!(
        kinds,
        vec![
            Some(TerminalKind::Digraph),
            Some(TerminalKind::Graph),
            Some(TerminalKind::Subgraph),
            Some(TerminalKind::Strict),
            Some(TerminalKind::Edge),
            Some(TerminalKind::Node),
            Some(TerminalKind::DashDash),
            Some(TerminalKind::Arrow),
            Some(TerminalKind::Semi),
            Some(TerminalKind::LBrace),
            Some(TerminalKind::RBrace),
            Some(TerminalKind::LSquare),
            Some(TerminalKind::RSquare),
            Some(TerminalKind::Comma),
            Some(TerminalKind::Colon),
            Some(TerminalKind::Assign),
            Some(TerminalKind::Identifier),
            None,
        ]
    );
}

#[test]
fn only_keyword_rules_have_boundaries() {
    let table = dot_rules().unwrap();
    for rule in &table {
        let is_keyword = rule.kind().is_some_and(TerminalKind::is_keyword);
        assert_eq!(rule.pattern().has_boundary(), is_keyword, "{rule:?}");
    }
}

#[test]
fn whitespace_rule_is_last_and_discards() {
    let table = dot_rules().unwrap();
    let last = table.rules().last().unwrap();
    assert!(last.is_discard());
}

// === Keywords ===

#[test]
fn keywords_match_standalone() {
    assert_eq!(first("digraph G"), Some((TerminalKind::Digraph, "digraph".into())));
    assert_eq!(first("graph{"), Some((TerminalKind::Graph, "graph".into())));
    assert_eq!(first("subgraph"), Some((TerminalKind::Subgraph, "subgraph".into())));
    assert_eq!(first("strict "), Some((TerminalKind::Strict, "strict".into())));
    assert_eq!(first("edge["), Some((TerminalKind::Edge, "edge".into())));
    assert_eq!(first("node;"), Some((TerminalKind::Node, "node".into())));
}

#[test]
fn keyword_followed_by_identifier_char_is_identifier() {
    assert_eq!(first("graph1"), ident("graph1"));
    assert_eq!(first("nodes"), ident("nodes"));
    assert_eq!(first("edge_weight"), ident("edge_weight"));
    assert_eq!(first("strict\u{0250}"), ident("strict\u{0250}"));
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(first("Graph"), ident("Graph"));
    assert_eq!(first("NODE"), ident("NODE"));
}

// === Punctuation ===

#[test]
fn two_character_punctuation_wins() {
    assert_eq!(first("->b"), Some((TerminalKind::Arrow, "->".into())));
    assert_eq!(first("--b"), Some((TerminalKind::DashDash, "--".into())));
}

#[test]
fn single_character_punctuation() {
    for (src, kind) in [
        (";", TerminalKind::Semi),
        ("{", TerminalKind::LBrace),
        ("}", TerminalKind::RBrace),
        ("[", TerminalKind::LSquare),
        ("]", TerminalKind::RSquare),
        (",", TerminalKind::Comma),
        (":", TerminalKind::Colon),
        ("=", TerminalKind::Assign),
    ] {
        assert_eq!(first(src), Some((kind, src.to_owned())));
    }
}

// === Identifier catch-all ===

#[test]
fn unquoted_identifiers() {
    assert_eq!(first("_a1 b"), ident("_a1"));
    assert_eq!(first("\u{0200}x\u{0377}"), ident("\u{0200}x\u{0377}"));
}

#[test]
fn numeral_stops_at_first_non_digit() {
    assert_eq!(first("12ab"), ident("12"));
}

#[test]
fn quoted_strings() {
    assert_eq!(first(r#""hello world" x"#), ident(r#""hello world""#));
    assert_eq!(first(r#""" x"#), ident(r#""""#));
    assert_eq!(first("\"multi\nline\""), ident("\"multi\nline\""));
}

#[test]
fn quoted_string_is_shortest_match() {
    assert_eq!(first(r#""a" "b""#), ident(r#""a""#));
}

#[test]
fn quoted_string_ends_at_first_quote_even_after_backslash() {
    assert_eq!(first(r#""a\"b" c"#), ident(r#""a\""#));
    assert_eq!(first(r#""say \"hi\"" x"#), ident(r#""say \""#));
}

#[test]
fn quoted_string_ending_in_backslash_pair_stops_at_closing_quote() {
    assert_eq!(first(r#""a\\";"b""#), ident(r#""a\\""#));
    assert_eq!(first(r#""C:\\dir\\" x"#), ident(r#""C:\\dir\\""#));
}

#[test]
fn unterminated_quoted_string_does_not_match() {
    assert_eq!(first(r#""open"#), None);
}

#[test]
fn numerals() {
    assert_eq!(first("42 "), ident("42"));
    assert_eq!(first("-42 "), ident("-42"));
    assert_eq!(first("3.14,"), ident("3.14"));
    assert_eq!(first(".5]"), ident(".5"));
    assert_eq!(first("-.5"), ident("-.5"));
    assert_eq!(first("7."), ident("7."));
}

#[test]
fn malformed_decimal_is_not_rejected() {
    assert_eq!(first("1.2.3"), ident("1.2"));
    assert_eq!(first(".3"), ident(".3"));
}

#[test]
fn lone_minus_matches_nothing() {
    assert_eq!(first("-x"), None);
}

// === Whitespace ===

#[test]
fn whitespace_matches_but_has_no_kind() {
    let table = dot_rules().unwrap();
    let pos = SourcePosition::new(" \t\r\n\x0b\x0cx", "t");
    let (index, m) = table.first_match(&pos).unwrap();
    assert_eq!(index, table.len() - 1);
    assert_eq!(m.lexeme, " \t\r\n\x0b\x0c");
    assert_eq!(m.kind, None);
}

#[test]
fn unknown_character_matches_nothing() {
    let table = dot_rules().unwrap();
    for src in ["@", "#", "!", "/", "\u{00e9}"] {
        assert!(table.first_match(&SourcePosition::new(src, "t")).is_none(), "{src}");
    }
}
