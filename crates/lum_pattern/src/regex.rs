//! Compiled textual patterns.
//!
//! Wraps a `regex_automata` meta regex. Anchored attempts use an anchored
//! search (no scanning past the start offset); ahead-of-cursor attempts use
//! an unanchored search. Both run over the whole haystack with a start
//! offset, so look-around assertions such as `\b` see the text before the
//! offset, and `^` without [`PatternFlags::MULTI_LINE`] only matches at
//! offset 0.

use std::fmt;
use std::sync::Arc;

use regex_automata::meta;
use regex_automata::{Anchored, Input, PatternID};

use crate::{Capabilities, GroupNames, MatchInfo, MatchMode, Matcher, PatternError, PatternFlags};

/// A regular expression compiled once and reused for every match.
#[derive(Clone)]
pub struct Regex {
    inner: meta::Regex,
    pattern: Box<str>,
    flags: PatternFlags,
    names: Option<Arc<GroupNames>>,
}

impl Regex {
    /// Compile `pattern` with default flags.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::with_flags(pattern, PatternFlags::empty())
    }

    /// Compile `pattern` with the given flags.
    pub fn with_flags(pattern: &str, flags: PatternFlags) -> Result<Self, PatternError> {
        let inner = meta::Regex::builder()
            .syntax(flags.syntax_config())
            .build(pattern)
            .map_err(|e| PatternError::Invalid {
                pattern: pattern.into(),
                message: e.to_string(),
            })?;

        let mut names = GroupNames::new();
        for (index, name) in inner.group_info().pattern_names(PatternID::ZERO).enumerate() {
            if let Some(name) = name {
                names.insert(name, index);
            }
        }
        let names = (!names.is_empty()).then(|| Arc::new(names));

        Ok(Self {
            inner,
            pattern: pattern.into(),
            flags,
            names,
        })
    }

    /// The source text of the pattern.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Number of capture groups, including the implicit group 0.
    pub fn group_count(&self) -> usize {
        self.inner.group_info().group_len(PatternID::ZERO)
    }
}

impl Matcher for Regex {
    fn capabilities(&self) -> Capabilities {
        Capabilities::ANCHORED | Capabilities::SEARCH
    }

    fn find_at(&self, haystack: &str, at: usize, mode: MatchMode) -> Option<MatchInfo> {
        let anchored = match mode {
            MatchMode::Anchored => Anchored::Yes,
            MatchMode::Search => Anchored::No,
        };
        let input = Input::new(haystack).range(at..).anchored(anchored);

        let mut caps = self.inner.create_captures();
        self.inner.search_captures(&input, &mut caps);
        let whole = caps.get_match()?;

        let groups = (1..caps.group_len()).map(|index| caps.get_group(index).map(|span| span.range()));
        let info = MatchInfo::with_groups(whole.range(), groups);
        Some(match &self.names {
            Some(names) => info.with_names(Arc::clone(names)),
            None => info,
        })
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regex")
            .field("pattern", &self.pattern)
            .field("flags", &self.flags)
            .finish()
    }
}

#[cfg(test)]
mod tests;
