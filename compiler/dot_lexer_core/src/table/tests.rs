use super::*;
use crate::Pattern;
use pretty_assertions::assert_eq;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Minus,
    Arrow,
    Word,
}

fn rule(source: &str, kind: Kind) -> LexRule<Kind> {
    LexRule::token(Pattern::regex(source).unwrap(), kind)
}

// === Priority ===

#[test]
fn first_rule_wins_even_if_later_rule_is_longer() {
    let table = RuleTable::new(vec![rule("-", Kind::Minus), rule("->", Kind::Arrow)]);
    let pos = SourcePosition::new("->", "t");
    let (index, m) = table.first_match(&pos).unwrap();
    assert_eq!(index, 0);
    assert_eq!(m.lexeme, "-");
    assert_eq!(m.kind, Some(Kind::Minus));
}

#[test]
fn later_rule_used_when_earlier_rules_fail() {
    let table = RuleTable::new(vec![rule("->", Kind::Arrow), rule("[a-z]+", Kind::Word)]);
    let pos = SourcePosition::new("abc->", "t");
    let (index, m) = table.first_match(&pos).unwrap();
    assert_eq!(index, 1);
    assert_eq!(m.lexeme, "abc");
}

#[test]
fn no_rule_matches() {
    let table = RuleTable::new(vec![rule("[a-z]+", Kind::Word)]);
    let pos = SourcePosition::new("@", "t");
    assert!(table.first_match(&pos).is_none());
}

#[test]
fn empty_table_never_matches() {
    let table: RuleTable<Kind> = RuleTable::new(Vec::new());
    assert!(table.is_empty());
    assert!(table.first_match(&SourcePosition::new("x", "t")).is_none());
}

// === Rules ===

#[test]
fn discard_rule_has_no_kind() {
    let ws: LexRule<Kind> = LexRule::skip(Pattern::regex(r"\s+").unwrap());
    assert!(ws.is_discard());
    let m = ws.try_match(&SourcePosition::new("  x", "t")).unwrap();
    assert_eq!(m.lexeme, "  ");
    assert_eq!(m.kind, None);
}

#[test]
fn try_match_does_not_advance() {
    let word = rule("[a-z]+", Kind::Word);
    let pos = SourcePosition::new("abc", "t");
    let first = word.try_match(&pos).unwrap();
    let second = word.try_match(&pos).unwrap();
    assert_eq!(first, second);
    assert_eq!(pos.peek(), "abc");
}

#[test]
fn match_char_len_counts_characters() {
    let word = rule("[\\x{0200}-\\x{0377}]+", Kind::Word);
    let m = word.try_match(&SourcePosition::new("\u{0250}\u{0251}", "t")).unwrap();
    assert_eq!(m.lexeme.len(), 4);
    assert_eq!(m.char_len(), 2);
}

// === Inspection ===

#[test]
fn table_preserves_insertion_order() {
    let table = RuleTable::new(vec![
        rule("->", Kind::Arrow),
        rule("-", Kind::Minus),
        rule("[a-z]+", Kind::Word),
    ]);
    let kinds: Vec<_> = table.iter().map(LexRule::kind).collect();
    assert_eq!(
        kinds,
        vec![Some(Kind::Arrow), Some(Kind::Minus), Some(Kind::Word)]
    );
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(1).and_then(LexRule::kind), Some(Kind::Minus));
    assert!(table.get(3).is_none());
}
