//! Pattern compile options and matcher capabilities.
//!
//! `PatternFlags` is part of the pattern cache key: the same pattern text
//! compiled with different flags yields distinct cache entries.

use std::fmt;

use bitflags::bitflags;
use regex_automata::util::syntax;

bitflags! {
    /// Compile options for textual patterns.
    ///
    /// The empty set is the default: case sensitive, `^`/`$` anchor to the
    /// whole haystack, `.` excludes `\n`, Unicode-aware classes.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct PatternFlags: u8 {
        /// Match letters regardless of case (`(?i)`).
        const CASE_INSENSITIVE = 1 << 0;
        /// `^` and `$` match at line boundaries (`(?m)`).
        const MULTI_LINE = 1 << 1;
        /// `.` also matches `\n` (`(?s)`).
        const DOT_MATCHES_NEW_LINE = 1 << 2;
        /// Verbose mode: whitespace and `#` comments in the pattern are ignored (`(?x)`).
        const IGNORE_WHITESPACE = 1 << 3;
        /// Quantifiers are lazy by default and greedy with `?` (`(?U)`).
        const SWAP_GREED = 1 << 4;
        /// Restrict `\w`, `\d`, `\s` and friends to ASCII.
        const ASCII = 1 << 5;
    }
}

impl PatternFlags {
    /// Translate into the regex syntax configuration.
    pub(crate) fn syntax_config(self) -> syntax::Config {
        syntax::Config::new()
            .case_insensitive(self.contains(Self::CASE_INSENSITIVE))
            .multi_line(self.contains(Self::MULTI_LINE))
            .dot_matches_new_line(self.contains(Self::DOT_MATCHES_NEW_LINE))
            .ignore_whitespace(self.contains(Self::IGNORE_WHITESPACE))
            .swap_greed(self.contains(Self::SWAP_GREED))
            .unicode(!self.contains(Self::ASCII))
    }
}

bitflags! {
    /// What kinds of matching a [`Matcher`](crate::Matcher) supports.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Capabilities: u8 {
        /// Can match starting exactly at a given offset.
        const ANCHORED = 1 << 0;
        /// Can find the leftmost match at or after a given offset.
        const SEARCH = 1 << 1;
    }
}

impl Capabilities {
    /// Whether these capabilities cover `mode`.
    #[inline]
    pub fn supports(self, mode: MatchMode) -> bool {
        self.contains(mode.required())
    }
}

/// How a match attempt relates to the starting offset.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MatchMode {
    /// The match must begin exactly at the offset.
    Anchored,
    /// The match may begin anywhere at or after the offset.
    Search,
}

impl MatchMode {
    /// The capability a matcher needs to serve this mode.
    #[inline]
    pub fn required(self) -> Capabilities {
        match self {
            MatchMode::Anchored => Capabilities::ANCHORED,
            MatchMode::Search => Capabilities::SEARCH,
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Anchored => f.write_str("anchored"),
            MatchMode::Search => f.write_str("search"),
        }
    }
}
