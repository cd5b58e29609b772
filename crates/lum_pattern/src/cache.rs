//! Per-owner cache of compiled textual patterns.
//!
//! Keyed by `(pattern text, flags)`. Entries are compiled on first use and
//! kept for the cache's lifetime; there is no eviction. The cache is a plain
//! value owned by whoever scans, never a process-wide table.

use rustc_hash::FxHashMap;

use crate::{PatternError, PatternFlags, Regex};

/// Compiled patterns owned by a single scanner.
#[derive(Clone, Debug, Default)]
pub struct PatternCache {
    /// Flags first so lookups by `&str` need no allocation.
    entries: FxHashMap<PatternFlags, FxHashMap<Box<str>, Regex>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the compiled form of `pattern`, compiling it on a miss.
    ///
    /// A pattern that fails to compile is not cached; the next request
    /// retries and fails again.
    pub fn get_or_compile(&mut self, pattern: &str, flags: PatternFlags) -> Result<&Regex, PatternError> {
        let by_text = self.entries.entry(flags).or_default();
        if !by_text.contains_key(pattern) {
            let compiled = Regex::with_flags(pattern, flags)?;
            tracing::trace!(pattern, ?flags, "compiled pattern");
            by_text.insert(pattern.into(), compiled);
        }
        Ok(&by_text[pattern])
    }

    /// Look up an already compiled pattern without compiling.
    pub fn get(&self, pattern: &str, flags: PatternFlags) -> Option<&Regex> {
        self.entries.get(&flags)?.get(pattern)
    }

    /// Number of compiled patterns held.
    pub fn len(&self) -> usize {
        self.entries.values().map(FxHashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
