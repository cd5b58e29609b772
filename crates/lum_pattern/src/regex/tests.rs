use pretty_assertions::assert_eq;

use super::*;
use crate::GroupRef;

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("test pattern failed to compile: {e}"),
    }
}

// === Compilation ===

#[test]
fn invalid_pattern_reports_text() {
    let err = Regex::new("(unclosed").err();
    match err {
        Some(PatternError::Invalid { pattern, message }) => {
            assert_eq!(&*pattern, "(unclosed");
            assert!(!message.is_empty());
        }
        None => panic!("expected compile failure"),
    }
}

#[test]
fn keeps_source_and_flags() {
    let re = match Regex::with_flags("a+", PatternFlags::CASE_INSENSITIVE) {
        Ok(re) => re,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(re.as_str(), "a+");
    assert_eq!(re.flags(), PatternFlags::CASE_INSENSITIVE);
    assert_eq!(re.group_count(), 1);
}

// === Anchored ===

#[test]
fn anchored_requires_match_at_offset() {
    let re = compile(r"\d+");
    assert_eq!(re.find_at("ab12", 0, MatchMode::Anchored), None);
    let info = re.find_at("ab12", 2, MatchMode::Anchored);
    assert_eq!(info.map(|m| m.span()), Some(2..4));
}

#[test]
fn anchored_sees_context_before_offset() {
    let re = compile(r"\bcd");
    // "cd" at offset 2 follows a word char, so no word boundary
    assert_eq!(re.find_at("abcd", 2, MatchMode::Anchored), None);
    assert_eq!(
        re.find_at("ab cd", 3, MatchMode::Anchored).map(|m| m.span()),
        Some(3..5)
    );
}

#[test]
fn caret_only_matches_at_haystack_start() {
    let re = compile("^x");
    assert_eq!(re.find_at("ax", 1, MatchMode::Anchored), None);

    let multi = match Regex::with_flags("^x", PatternFlags::MULTI_LINE) {
        Ok(re) => re,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(
        multi.find_at("a\nx", 2, MatchMode::Anchored).map(|m| m.span()),
        Some(2..3)
    );
}

#[test]
fn zero_length_anchored_match() {
    let re = compile(r"\d*");
    let info = re.find_at("abc", 1, MatchMode::Anchored);
    assert_eq!(info.map(|m| m.span()), Some(1..1));
}

// === Search ===

#[test]
fn search_finds_leftmost_after_offset() {
    let re = compile(r"\d+");
    assert_eq!(
        re.find_at("1 a 23 45", 1, MatchMode::Search).map(|m| m.span()),
        Some(4..6)
    );
    assert_eq!(re.find_at("1 a", 1, MatchMode::Search), None);
}

#[test]
fn search_at_end_of_haystack() {
    let re = compile("$");
    assert_eq!(
        re.find_at("abc", 3, MatchMode::Search).map(|m| m.span()),
        Some(3..3)
    );
}

// === Captures ===

#[test]
fn positional_and_named_captures() {
    let re = compile(r"(?P<key>\w+)=(\d+)?(?P<tail>;)?");
    let Some(info) = re.find_at("x = k=;", 4, MatchMode::Search) else {
        panic!("expected a match");
    };
    assert_eq!(info.span(), 4..7);
    assert_eq!(info.group_count(), 4);
    assert_eq!(info.group_span(1), Some(4..5));
    assert_eq!(info.group_span(2), None);
    assert_eq!(info.group_index(&GroupRef::from("key")), Some(1));
    assert_eq!(info.group_index(&GroupRef::from("tail")), Some(3));
    assert_eq!(info.group_span(3), Some(6..7));
    let names: Vec<_> = info.named_groups().collect();
    assert_eq!(names, vec![("key", 1), ("tail", 3)]);
}

#[test]
fn unnamed_pattern_has_no_name_table() {
    let re = compile(r"(a)(b)");
    let Some(info) = re.find_at("ab", 0, MatchMode::Anchored) else {
        panic!("expected a match");
    };
    assert_eq!(info.named_groups().count(), 0);
    assert_eq!(info.group_index(&GroupRef::from("a")), None);
}

// === Flags ===

#[test]
fn flags_change_semantics() {
    let ci = match Regex::with_flags("abc", PatternFlags::CASE_INSENSITIVE) {
        Ok(re) => re,
        Err(e) => panic!("{e}"),
    };
    assert!(ci.find_at("xABC", 1, MatchMode::Anchored).is_some());

    let dotall = match Regex::with_flags("a.b", PatternFlags::DOT_MATCHES_NEW_LINE) {
        Ok(re) => re,
        Err(e) => panic!("{e}"),
    };
    assert!(dotall.find_at("a\nb", 0, MatchMode::Anchored).is_some());
    assert!(compile("a.b").find_at("a\nb", 0, MatchMode::Anchored).is_none());

    let verbose = match Regex::with_flags(r"a \s* b  # spaced", PatternFlags::IGNORE_WHITESPACE) {
        Ok(re) => re,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(
        verbose.find_at("a   b", 0, MatchMode::Anchored).map(|m| m.span()),
        Some(0..5)
    );
}
