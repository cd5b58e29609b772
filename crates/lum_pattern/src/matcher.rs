//! The matcher capability interface and raw match information.
//!
//! A [`Matcher`] advertises which of the two matching operations it
//! supports via [`Capabilities`]; callers check the capability before
//! invoking [`Matcher::find_at`]. Both built-in pattern kinds
//! ([`Regex`](crate::Regex), [`Literal`](crate::Literal)) implement it, and
//! any external type may as well.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{Capabilities, MatchMode};

/// Something that can locate pattern occurrences in text.
pub trait Matcher {
    /// Which [`MatchMode`]s this matcher can serve.
    fn capabilities(&self) -> Capabilities;

    /// Attempt a match in `haystack` starting at byte offset `at`.
    ///
    /// With [`MatchMode::Anchored`] the returned match must start at `at`;
    /// with [`MatchMode::Search`] it is the leftmost match starting at or
    /// after `at`. Only called with modes covered by
    /// [`capabilities()`](Self::capabilities). `at` is always a char
    /// boundary no greater than `haystack.len()`.
    fn find_at(&self, haystack: &str, at: usize, mode: MatchMode) -> Option<MatchInfo>;
}

/// Reference to a capture group, either by position or by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupRef {
    Index(usize),
    Name(Box<str>),
}

impl From<usize> for GroupRef {
    fn from(index: usize) -> Self {
        GroupRef::Index(index)
    }
}

impl From<&str> for GroupRef {
    fn from(name: &str) -> Self {
        GroupRef::Name(name.into())
    }
}

impl fmt::Display for GroupRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupRef::Index(index) => write!(f, "{index}"),
            GroupRef::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Name table for the capture groups of one pattern.
///
/// Built once per compiled pattern and shared by every match it produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupNames {
    by_name: FxHashMap<Box<str>, usize>,
}

impl GroupNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` for group `index`. A repeated name keeps the first index.
    pub fn insert(&mut self, name: &str, index: usize) {
        self.by_name.entry(name.into()).or_insert(index);
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Names with their group indices, in group order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .by_name
            .iter()
            .map(|(name, &index)| (&**name, index))
            .collect();
        entries.sort_by_key(|&(_, index)| index);
        entries.into_iter()
    }
}

/// Raw result of one successful match.
///
/// Group 0 is the whole match and is always present. Further groups are
/// `None` when they did not participate in the match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchInfo {
    groups: SmallVec<[Option<Range<usize>>; 4]>,
    names: Option<Arc<GroupNames>>,
}

impl MatchInfo {
    /// A match with no capture groups beyond the whole match.
    pub fn new(span: Range<usize>) -> Self {
        let mut groups = SmallVec::new();
        groups.push(Some(span));
        Self {
            groups,
            names: None,
        }
    }

    /// A match with positional capture groups `1..`.
    pub fn with_groups<I>(span: Range<usize>, groups: I) -> Self
    where
        I: IntoIterator<Item = Option<Range<usize>>>,
    {
        let mut info = Self::new(span);
        info.groups.extend(groups);
        info
    }

    /// Attach a name table for named group lookup.
    #[must_use]
    pub fn with_names(mut self, names: Arc<GroupNames>) -> Self {
        self.names = Some(names);
        self
    }

    /// Byte range of the whole match.
    pub fn span(&self) -> Range<usize> {
        match self.groups.first() {
            Some(Some(span)) => span.clone(),
            _ => 0..0,
        }
    }

    pub fn start(&self) -> usize {
        self.span().start
    }

    pub fn end(&self) -> usize {
        self.span().end
    }

    /// Number of groups, including group 0.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Resolve a group reference to a positional index.
    ///
    /// Returns `None` when the group does not exist in the pattern.
    pub fn group_index(&self, group: &GroupRef) -> Option<usize> {
        match group {
            GroupRef::Index(index) if *index < self.groups.len() => Some(*index),
            GroupRef::Index(_) => None,
            GroupRef::Name(name) => self.names.as_ref()?.get(name),
        }
    }

    /// Byte range of group `index`, `None` if it did not participate.
    pub fn group_span(&self, index: usize) -> Option<Range<usize>> {
        self.groups.get(index).cloned().flatten()
    }

    /// Named groups with their indices, in group order.
    pub fn named_groups(&self) -> impl Iterator<Item = (&str, usize)> {
        self.names.iter().flat_map(|names| names.iter())
    }
}
