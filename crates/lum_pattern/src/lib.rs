//! Pattern layer for `lum_scan`.
//!
//! Defines the [`Matcher`] capability interface used by the scanner, the two
//! built-in matchers ([`Regex`] for textual patterns, [`Literal`] for fixed
//! strings), and [`PatternCache`], the per-scanner table of compiled
//! textual patterns.

mod cache;
mod error;
mod flags;
mod literal;
mod matcher;
mod regex;

pub use cache::PatternCache;
pub use error::PatternError;
pub use flags::{Capabilities, MatchMode, PatternFlags};
pub use literal::Literal;
pub use matcher::{GroupNames, GroupRef, MatchInfo, Matcher};
pub use regex::Regex;
