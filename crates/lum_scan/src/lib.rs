//! Stateful scan cursor for hand-written tokenizers.
//!
//! [`ScanCursor`] owns a source string and a byte offset into it. Each
//! operation tests a pattern at or after the offset and optionally consumes
//! the text and logs the outcome. The two newest outcomes are retained, so
//! callers can inspect the last match and undo exactly one logged step.
//!
//! ```text
//! let mut s = ScanCursor::with_source("let x = 42;");
//! s.scan(r"[a-z]+")?;            // Some("let")
//! s.skip_whitespace(None, true)?;
//! s.check(r"\w+")?;              // Some("x"), cursor unchanged
//! ```
//!
//! Patterns come in as text (compiled once per cursor and cached), text
//! with [`PatternFlags`], or any [`Matcher`] implementation.

mod error;
mod history;
mod pattern_arg;
mod scanner;

pub use error::{ErrorKind, Result, ScanError};
pub use history::MatchRecord;
pub use pattern_arg::PatternArg;
pub use scanner::{Location, NextNamed, ScanCursor};

pub use lum_pattern::{
    Capabilities, GroupRef, Literal, MatchInfo, MatchMode, Matcher, PatternError, PatternFlags,
    Regex,
};
