//! Multi-pattern lookahead and pattern-set automation.
//!
//! The lookahead helpers (`index`, `get_next*`) neither consume nor log.
//! `next_match` drives a registered set of named patterns, remembering each
//! pattern's nearest match so repeated calls only re-search patterns whose
//! remembered match the cursor has moved past.

use lum_pattern::{MatchInfo, MatchMode, Matcher, PatternFlags};
use memchr::memmem;

use super::ScanCursor;
use crate::history::MatchRecord;
use crate::{PatternArg, Result, ScanError};

/// Nearest match among a set of named patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NextNamed<'n> {
    pub name: &'n str,
    /// Byte offset where the match starts.
    pub start: usize,
    pub info: MatchInfo,
}

/// A pattern registered with [`ScanCursor::add_pattern`].
#[derive(Clone, Debug)]
pub(super) struct NamedPattern {
    name: Box<str>,
    pattern: Box<str>,
    flags: PatternFlags,
    probe: Probe,
}

/// Remembered search result of one registered pattern.
#[derive(Clone, Debug)]
enum Probe {
    Unsearched,
    /// Searched from `from`; the nearest match is `info`.
    Found { from: usize, info: MatchInfo },
    /// Searched from `from`; nothing matches at or after it.
    Exhausted { from: usize },
}

impl Probe {
    /// Whether the remembered result still answers a search from `target`.
    fn is_current(&self, target: usize) -> bool {
        match self {
            Probe::Unsearched => false,
            Probe::Found { from, info } => *from <= target && target <= info.start(),
            Probe::Exhausted { from } => *from <= target,
        }
    }
}

impl ScanCursor {
    /// Byte offset of the next match at or after the cursor.
    pub fn index<'p>(&mut self, pattern: impl Into<PatternArg<'p>>) -> Result<Option<usize>> {
        Ok(self
            .find(pattern.into(), MatchMode::Search)?
            .map(|info| info.start()))
    }

    /// Nearest match among `patterns`, with its start offset.
    ///
    /// Ties go to the pattern listed first.
    pub fn get_next<'p, I>(&mut self, patterns: I) -> Result<Option<(usize, MatchInfo)>>
    where
        I: IntoIterator,
        I::Item: Into<PatternArg<'p>>,
    {
        let mut nearest: Option<MatchInfo> = None;
        for pattern in patterns {
            let Some(info) = self.find(pattern.into(), MatchMode::Search)? else {
                continue;
            };
            if nearest.as_ref().map_or(true, |best| info.start() < best.start()) {
                let at_cursor = info.start() == self.pos;
                nearest = Some(info);
                if at_cursor {
                    break;
                }
            }
        }
        Ok(nearest.map(|info| (info.start(), info)))
    }

    /// Nearest match among named patterns.
    ///
    /// Ties go to the pattern listed first.
    pub fn get_next_named<'n, 'p, I, P>(&mut self, patterns: I) -> Result<Option<NextNamed<'n>>>
    where
        I: IntoIterator<Item = (&'n str, P)>,
        P: Into<PatternArg<'p>>,
    {
        let mut nearest: Option<NextNamed<'n>> = None;
        for (name, pattern) in patterns {
            let Some(info) = self.find(pattern.into(), MatchMode::Search)? else {
                continue;
            };
            let start = info.start();
            if nearest.as_ref().map_or(true, |best| start < best.start) {
                nearest = Some(NextNamed { name, start, info });
                if start == self.pos {
                    break;
                }
            }
        }
        Ok(nearest)
    }

    /// Nearest occurrence of any plain substring in `needles`.
    ///
    /// Ties go to the needle listed first.
    pub fn get_next_strpos<'n>(&self, needles: &[&'n str]) -> Result<Option<(usize, &'n str)>> {
        if self.source.is_none() {
            return Err(ScanError::NoSource);
        }
        let rest = self.rest().as_bytes();
        let mut nearest: Option<(usize, &'n str)> = None;
        for &needle in needles {
            let Some(offset) = memmem::find(rest, needle.as_bytes()) else {
                continue;
            };
            let start = self.pos + offset;
            if nearest.map_or(true, |(best, _)| start < best) {
                nearest = Some((start, needle));
            }
        }
        Ok(nearest)
    }

    /// Register a named pattern for [`next_match`](Self::next_match).
    ///
    /// Names need not be unique. The pattern is compiled immediately.
    pub fn add_pattern(&mut self, name: &str, pattern: &str) -> Result<()> {
        self.add_pattern_with_flags(name, pattern, PatternFlags::empty())
    }

    pub fn add_pattern_with_flags(&mut self, name: &str, pattern: &str, flags: PatternFlags) -> Result<()> {
        self.cache.get_or_compile(pattern, flags)?;
        self.patterns.push(NamedPattern {
            name: name.into(),
            pattern: pattern.into(),
            flags,
            probe: Probe::Unsearched,
        });
        Ok(())
    }

    /// Remove every registered pattern called `name`. Returns how many were removed.
    pub fn remove_pattern(&mut self, name: &str) -> usize {
        let before = self.patterns.len();
        self.patterns.retain(|entry| &*entry.name != name);
        before - self.patterns.len()
    }

    /// Find the nearest match among the registered patterns.
    ///
    /// Returns the winning pattern's name and the match start. With
    /// `consume_and_log`, the match is logged and the cursor moves to its
    /// end, skipping any unmatched text before it; the logged record keeps
    /// the pre-call offset so `unscan` restores it.
    pub fn next_match(&mut self, consume_and_log: bool) -> Result<Option<(&str, usize)>> {
        let Some(source) = self.source.as_deref() else {
            return Err(ScanError::NoSource);
        };
        let target = self.pos;

        let mut nearest: Option<(usize, usize)> = None;
        for (index, entry) in self.patterns.iter_mut().enumerate() {
            if !entry.probe.is_current(target) {
                let regex = self.cache.get_or_compile(&entry.pattern, entry.flags)?;
                entry.probe = match regex.find_at(source, target, MatchMode::Search) {
                    Some(info) => Probe::Found { from: target, info },
                    None => {
                        tracing::trace!(name = %entry.name, from = target, "pattern exhausted");
                        Probe::Exhausted { from: target }
                    }
                };
            }
            let Probe::Found { info, .. } = &entry.probe else {
                continue;
            };
            let start = info.start();
            if nearest.map_or(true, |(_, best)| start < best) {
                nearest = Some((index, start));
                if start == target {
                    break;
                }
            }
        }

        let Some((index, start)) = nearest else {
            return Ok(None);
        };
        if consume_and_log {
            if let Probe::Found { info, .. } = &self.patterns[index].probe {
                let info = info.clone();
                let end = info.end();
                self.history
                    .push(MatchRecord::matched(target, info.span(), info));
                self.pos = end;
            }
        }
        Ok(Some((&*self.patterns[index].name, start)))
    }

    /// Drop remembered search results; called whenever the source or
    /// position is reset.
    pub(super) fn forget_pattern_probes(&mut self) {
        for entry in &mut self.patterns {
            entry.probe = Probe::Unsearched;
        }
    }
}
