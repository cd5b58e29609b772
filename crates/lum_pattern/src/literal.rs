//! Exact-text matcher.
//!
//! Useful for delimiters and keywords where a regex is overkill. Searching
//! uses a prebuilt `memchr::memmem` finder.

use memchr::memmem;

use crate::{Capabilities, MatchInfo, MatchMode, Matcher};

/// Matches one fixed string.
#[derive(Clone, Debug)]
pub struct Literal {
    finder: memmem::Finder<'static>,
    capabilities: Capabilities,
}

impl Literal {
    /// A literal supporting both anchored and search matching.
    pub fn new(needle: &str) -> Self {
        Self {
            finder: memmem::Finder::new(needle.as_bytes()).into_owned(),
            capabilities: Capabilities::all(),
        }
    }

    /// A literal restricted to the given capabilities.
    #[must_use]
    pub fn restricted_to(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn needle(&self) -> &[u8] {
        self.finder.needle()
    }
}

impl Matcher for Literal {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn find_at(&self, haystack: &str, at: usize, mode: MatchMode) -> Option<MatchInfo> {
        let rest = haystack.as_bytes().get(at..)?;
        let needle = self.finder.needle();
        let start = match mode {
            MatchMode::Anchored => rest.starts_with(needle).then_some(at)?,
            MatchMode::Search => at + self.finder.find(rest)?,
        };
        Some(MatchInfo::new(start..start + needle.len()))
    }
}
