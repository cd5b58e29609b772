#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use crate::{ScanCursor, ScanError};

use super::Location;

fn at(source: &str, pos: usize) -> ScanCursor {
    let mut s = ScanCursor::with_source(source);
    s.set_position(pos).unwrap();
    s
}

// === bol / eol ===

#[test]
fn crlf_boundaries() {
    let source = "ab\r\ncd";
    assert!(at(source, 2).eol());
    assert!(!at(source, 2).bol());
    assert!(at(source, 4).bol());
    assert!(!at(source, 4).eol());
}

#[test]
fn inside_crlf_is_neither() {
    let s = at("ab\r\ncd", 3);
    assert!(!s.bol());
    assert!(!s.eol());
}

#[test]
fn lone_terminators() {
    assert!(at("a\rb", 1).eol());
    assert!(at("a\rb", 2).bol());
    assert!(at("a\nb", 1).eol());
    assert!(at("a\nb", 2).bol());
}

#[test]
fn source_edges() {
    let s = at("abc", 0);
    assert!(s.bol());
    assert!(!s.eol());

    let s = at("abc", 3);
    assert!(s.eol());
    assert!(!s.bol());

    let s = ScanCursor::with_source("");
    assert!(s.bol());
    assert!(s.eol());
}

#[test]
fn leading_newline() {
    assert!(at("\nx", 0).eol());
    assert!(at("\nx", 1).bol());
}

// === location ===

#[test]
fn location_lf() {
    assert_eq!(at("ab\ncd\nef", 0).location(), Ok(Location { line: 1, column: 1 }));
    assert_eq!(at("ab\ncd\nef", 2).location(), Ok(Location { line: 1, column: 3 }));
    assert_eq!(at("ab\ncd\nef", 7).location(), Ok(Location { line: 3, column: 2 }));
}

#[test]
fn location_crlf() {
    // Measured from the `\r`, so the CRLF's `\n` occupies column 1.
    assert_eq!(at("ab\r\ncd", 4).location(), Ok(Location { line: 2, column: 2 }));
    assert_eq!(at("ab\r\ncd", 5).location(), Ok(Location { line: 2, column: 3 }));
    assert_eq!(at("ab\r\ncd\r\nef", 8).location(), Ok(Location { line: 3, column: 2 }));
}

#[test]
fn location_cr() {
    assert_eq!(at("a\rb\rc", 4).location(), Ok(Location { line: 3, column: 1 }));
}

#[test]
fn location_counts_only_first_style() {
    // Consumed text contains a CRLF, so the lone LF is not counted.
    let location = at("a\r\nb\nc", 5).location().unwrap();
    assert_eq!(location, Location { line: 2, column: 4 });
}

#[test]
fn location_needs_source() {
    assert_eq!(ScanCursor::new().location(), Err(ScanError::NoSource));
}

#[test]
fn location_display() {
    assert_eq!(Location { line: 3, column: 2 }.to_string(), "3:2");
}

// === skip_lines ===

#[test]
fn skip_lines_mixed_terminators() {
    let mut s = ScanCursor::with_source("one\ntwo\r\nthree\rfour");
    assert_eq!(s.skip_lines(2), Ok(2));
    assert_eq!(s.rest(), "three\rfour");
    assert_eq!(s.skip_lines(5), Ok(1));
    assert_eq!(s.rest(), "four");
    assert_eq!(s.skip_lines(1), Ok(0));
    assert!(s.last_record().is_none());
}

#[test]
fn skip_zero_lines() {
    let mut s = ScanCursor::with_source("a\nb");
    assert_eq!(s.skip_lines(0), Ok(0));
    assert_eq!(s.position(), 0);
}
