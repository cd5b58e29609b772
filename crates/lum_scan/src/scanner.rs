//! The scan cursor.
//!
//! A [`ScanCursor`] walks an owned source string left to right. Callers ask
//! whether a pattern matches at the cursor (`check*`), commit to it
//! (`scan*`, `skip*`), and may retract the last logged operation with
//! [`unscan()`](ScanCursor::unscan).
//!
//! # Operation families
//!
//! | family   | anchor        | consumes | logged |
//! |----------|---------------|----------|--------|
//! | `check*` | see suffix    | no       | yes    |
//! | `scan*`  | see suffix    | yes      | yes    |
//! | `skip*`  | see suffix    | yes      | no     |
//! | `exists` | search        | no       | no     |
//!
//! No suffix means the match must start at the cursor. `_to` searches ahead
//! and reports the text before the match; `_until` searches ahead and
//! reports the text through the end of the match.
//!
//! All offsets and lengths are byte offsets into the source. `peek` and
//! `get` count characters.

mod automation;
mod lines;

use std::ops::Range;

use lum_pattern::{GroupRef, MatchInfo, MatchMode, Matcher, PatternCache};

use crate::history::{History, MatchRecord, Outcome};
use crate::{PatternArg, Result, ScanError};

pub use automation::NextNamed;
pub use lines::Location;

/// Parameters for one run of the matching primitive.
#[derive(Clone, Copy, Debug)]
struct Attempt {
    mode: MatchMode,
    /// Advance the cursor past the reported text.
    consume: bool,
    /// Report text through the match end rather than up to the match start.
    include_match: bool,
    /// Push a record onto the history.
    log: bool,
}

impl Attempt {
    const fn new(mode: MatchMode, consume: bool, include_match: bool, log: bool) -> Self {
        Self {
            mode,
            consume,
            include_match,
            log,
        }
    }
}

const CHECK: Attempt = Attempt::new(MatchMode::Anchored, false, true, true);
const CHECK_TO: Attempt = Attempt::new(MatchMode::Search, false, false, true);
const CHECK_UNTIL: Attempt = Attempt::new(MatchMode::Search, false, true, true);
const SCAN: Attempt = Attempt::new(MatchMode::Anchored, true, true, true);
const SCAN_TO: Attempt = Attempt::new(MatchMode::Search, true, false, true);
const SCAN_UNTIL: Attempt = Attempt::new(MatchMode::Search, true, true, true);
const SKIP: Attempt = Attempt::new(MatchMode::Anchored, true, true, false);
const SKIP_TO: Attempt = Attempt::new(MatchMode::Search, true, false, false);
const SKIP_UNTIL: Attempt = Attempt::new(MatchMode::Search, true, true, false);
const EXISTS: Attempt = Attempt::new(MatchMode::Search, false, true, false);

/// Line terminators recognised by line-oriented helpers.
const LINE_TERMINATOR: &str = r"\r\n|\r|\n";

/// Stateful cursor over an immutable source string.
///
/// Owns its source, its match history and its compiled-pattern cache.
/// Not synchronised: share across threads only behind external locking.
#[derive(Clone, Debug, Default)]
pub struct ScanCursor {
    source: Option<Box<str>>,
    pos: usize,
    history: History,
    cache: PatternCache,
    patterns: Vec<automation::NamedPattern>,
}

impl ScanCursor {
    /// A cursor with no source bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cursor bound to `source`, positioned at 0.
    pub fn with_source(source: impl Into<Box<str>>) -> Self {
        let mut cursor = Self::new();
        cursor.set_source(source);
        cursor
    }

    // === Source & position ===

    /// Bind a new source. Resets the position to 0 and clears the match
    /// history. Compiled patterns stay cached.
    pub fn set_source(&mut self, source: impl Into<Box<str>>) {
        let source = source.into();
        tracing::debug!(len = source.len(), "bound scanner source");
        self.source = Some(source);
        self.reset();
    }

    /// The bound source, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Length of the source in bytes (0 when unbound).
    pub fn len(&self) -> usize {
        self.text().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current cursor offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor to `pos`.
    ///
    /// `pos` must lie in `0..=len()` and on a character boundary. The match
    /// history is left untouched.
    pub fn set_position(&mut self, pos: usize) -> Result<()> {
        let text = self.text();
        if pos > text.len() {
            return Err(ScanError::PositionOutOfRange {
                pos,
                len: text.len(),
            });
        }
        if !text.is_char_boundary(pos) {
            return Err(ScanError::NotCharBoundary { pos });
        }
        self.pos = pos;
        Ok(())
    }

    /// Move the cursor by `delta` bytes relative to its current offset.
    pub fn pos_shift(&mut self, delta: isize) -> Result<usize> {
        let target = self
            .pos
            .checked_add_signed(delta)
            .filter(|&target| target <= self.len())
            .ok_or(ScanError::ShiftOutOfRange {
                from: self.pos,
                delta,
                len: self.len(),
            })?;
        self.set_position(target)?;
        Ok(target)
    }

    /// Whether the cursor sits at the end of the source.
    pub fn at_end(&self) -> bool {
        self.pos >= self.len()
    }

    /// Rewind to offset 0 and clear the match history.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.history.clear();
        self.forget_pattern_probes();
    }

    /// Stop scanning: reset, then jump to the end of the source.
    pub fn terminate(&mut self) {
        self.reset();
        self.pos = self.len();
        tracing::debug!(pos = self.pos, "scanner terminated");
    }

    // === Literal lookahead ===

    /// Up to `n` characters from the cursor, without consuming them.
    ///
    /// Returns the empty string at the end of the source. Not logged.
    pub fn peek(&self, n: usize) -> &str {
        let rest = self.rest();
        let end = rest.char_indices().nth(n).map_or(rest.len(), |(index, _)| index);
        &rest[..end]
    }

    /// Up to `n` characters from the cursor, consuming them. Not logged.
    pub fn get(&mut self, n: usize) -> &str {
        let start = self.pos;
        let len = self.peek(n).len();
        self.pos += len;
        &self.text()[start..self.pos]
    }

    /// The unconsumed remainder of the source.
    ///
    /// Borrowed straight from the owned source: slicing is O(1), so there
    /// is no per-offset cache to keep in sync with the cursor.
    pub fn rest(&self) -> &str {
        &self.text()[self.pos..]
    }

    /// Byte length of [`rest()`](Self::rest).
    pub fn rest_len(&self) -> usize {
        self.len() - self.pos
    }

    // === Pattern operations ===

    /// Match at the cursor without consuming. Logged.
    pub fn check<'p>(&mut self, pattern: impl Into<PatternArg<'p>>) -> Result<Option<&str>> {
        self.run_text(pattern.into(), CHECK)
    }

    /// Search ahead; return the text before the match without consuming. Logged.
    pub fn check_to<'p>(&mut self, pattern: impl Into<PatternArg<'p>>) -> Result<Option<&str>> {
        self.run_text(pattern.into(), CHECK_TO)
    }

    /// Search ahead; return the text through the match end without consuming. Logged.
    pub fn check_until<'p>(&mut self, pattern: impl Into<PatternArg<'p>>) -> Result<Option<&str>> {
        self.run_text(pattern.into(), CHECK_UNTIL)
    }

    /// Match at the cursor and consume the match. Logged.
    ///
    /// `Ok(None)` means no match; `Ok(Some(""))` is a successful empty match.
    pub fn scan<'p>(&mut self, pattern: impl Into<PatternArg<'p>>) -> Result<Option<&str>> {
        self.run_text(pattern.into(), SCAN)
    }

    /// Search ahead and consume up to the start of the match. Logged.
    pub fn scan_to<'p>(&mut self, pattern: impl Into<PatternArg<'p>>) -> Result<Option<&str>> {
        self.run_text(pattern.into(), SCAN_TO)
    }

    /// Search ahead and consume through the end of the match. Logged.
    pub fn scan_until<'p>(&mut self, pattern: impl Into<PatternArg<'p>>) -> Result<Option<&str>> {
        self.run_text(pattern.into(), SCAN_UNTIL)
    }

    /// Like [`scan`](Self::scan) but returns the byte count consumed. Not logged.
    pub fn skip<'p>(&mut self, pattern: impl Into<PatternArg<'p>>) -> Result<Option<usize>> {
        Ok(self.run(pattern.into(), SKIP)?.map(|span| span.len()))
    }

    /// Like [`scan_to`](Self::scan_to) but returns the byte count consumed. Not logged.
    pub fn skip_to<'p>(&mut self, pattern: impl Into<PatternArg<'p>>) -> Result<Option<usize>> {
        Ok(self.run(pattern.into(), SKIP_TO)?.map(|span| span.len()))
    }

    /// Like [`scan_until`](Self::scan_until) but returns the byte count consumed. Not logged.
    pub fn skip_until<'p>(&mut self, pattern: impl Into<PatternArg<'p>>) -> Result<Option<usize>> {
        Ok(self.run(pattern.into(), SKIP_UNTIL)?.map(|span| span.len()))
    }

    /// Whether the pattern matches anywhere at or after the cursor.
    /// Neither consumes nor logs.
    pub fn exists<'p>(&mut self, pattern: impl Into<PatternArg<'p>>) -> Result<bool> {
        Ok(self.run(pattern.into(), EXISTS)?.is_some())
    }

    /// Consume up to `n` characters and return the byte count consumed.
    pub fn skip_bytes(&mut self, n: usize) -> usize {
        self.get(n).len()
    }

    /// Skip a run of whitespace and return the byte count consumed.
    ///
    /// At most `max` characters are skipped when given. With `multiline`,
    /// any Unicode whitespace counts; without it, only space, tab, form feed
    /// and backspace do, so no kind of line break is crossed. Not logged.
    pub fn skip_whitespace(&mut self, max: Option<usize>, multiline: bool) -> Result<usize> {
        if self.source.is_none() {
            return Err(ScanError::NoSource);
        }
        let is_blank = |c: char| {
            if multiline {
                c.is_whitespace()
            } else {
                matches!(c, ' ' | '\t' | '\x0C' | '\x08')
            }
        };
        let skipped: usize = self
            .rest()
            .chars()
            .take_while(|&c| is_blank(c))
            .take(max.unwrap_or(usize::MAX))
            .map(char::len_utf8)
            .sum();
        self.pos += skipped;
        Ok(skipped)
    }

    // === Match history ===

    /// Whether the most recent logged attempt succeeded.
    pub fn matched(&self) -> Result<bool> {
        self.history
            .current()
            .map(MatchRecord::is_match)
            .ok_or(ScanError::NoMatchRecorded)
    }

    /// Text reported by the most recent successful attempt.
    pub fn match_str(&self) -> Result<&str> {
        let span = self.last_outcome()?.span.clone();
        Ok(&self.text()[span])
    }

    /// Byte length of [`match_str()`](Self::match_str).
    pub fn match_len(&self) -> Result<usize> {
        Ok(self.last_outcome()?.span.len())
    }

    /// Byte offset where [`match_str()`](Self::match_str) starts.
    pub fn match_pos(&self) -> Result<usize> {
        Ok(self.last_outcome()?.span.start)
    }

    /// Raw match information of the most recent successful attempt.
    pub fn match_info(&self) -> Result<&MatchInfo> {
        Ok(&self.last_outcome()?.info)
    }

    /// Text of one capture group of the most recent match.
    ///
    /// Group 0 is the raw pattern match. `Ok(None)` means the group exists
    /// but did not participate.
    pub fn match_group(&self, group: impl Into<GroupRef>) -> Result<Option<&str>> {
        let info = &self.last_outcome()?.info;
        let group = group.into();
        let index = info.group_index(&group).ok_or(ScanError::NoSuchGroup(group))?;
        Ok(info.group_span(index).map(|span| &self.text()[span]))
    }

    /// Texts of all positional groups after group 0.
    pub fn match_groups(&self) -> Result<Vec<Option<&str>>> {
        let info = &self.last_outcome()?.info;
        let text = self.text();
        Ok((1..info.group_count())
            .map(|index| info.group_span(index).map(|span| &text[span]))
            .collect())
    }

    /// Named groups with their texts, in group order.
    pub fn match_groupdict(&self) -> Result<Vec<(&str, Option<&str>)>> {
        let info = &self.last_outcome()?.info;
        let text = self.text();
        Ok(info
            .named_groups()
            .map(|(name, index)| (name, info.group_span(index).map(|span| &text[span])))
            .collect())
    }

    /// Source text before the most recent match.
    pub fn pre_match(&self) -> Result<&str> {
        let span = &self.last_outcome()?.span;
        Ok(&self.text()[..span.start])
    }

    /// Source text after the most recent match.
    pub fn post_match(&self) -> Result<&str> {
        let span = &self.last_outcome()?.span;
        Ok(&self.text()[span.end..])
    }

    /// The newest match record, if any.
    pub fn last_record(&self) -> Option<&MatchRecord> {
        self.history.current()
    }

    /// The record before the newest one, if any.
    pub fn previous_record(&self) -> Option<&MatchRecord> {
        self.history.previous()
    }

    /// Undo the most recent logged operation.
    ///
    /// Restores the cursor to where that operation started and discards its
    /// record; accessors then report the record before it. Only one level is
    /// kept, so a second `unscan` without an intervening logged operation
    /// fails.
    pub fn unscan(&mut self) -> Result<()> {
        let offset = self.history.rewind().ok_or(ScanError::NothingToUnscan)?;
        tracing::trace!(from = self.pos, to = offset, "unscan");
        self.pos = offset;
        Ok(())
    }

    // === Internals ===

    fn text(&self) -> &str {
        self.source.as_deref().unwrap_or("")
    }

    fn last_outcome(&self) -> Result<&Outcome> {
        self.history
            .current()
            .ok_or(ScanError::NoMatchRecorded)?
            .outcome()
            .ok_or(ScanError::LastMatchFailed)
    }

    fn run_text(&mut self, pattern: PatternArg<'_>, attempt: Attempt) -> Result<Option<&str>> {
        let span = self.run(pattern, attempt)?;
        Ok(span.map(|span| &self.text()[span]))
    }

    /// Resolve `pattern` and look for a match from the cursor. No state
    /// other than the pattern cache changes.
    fn find(&mut self, pattern: PatternArg<'_>, mode: MatchMode) -> Result<Option<MatchInfo>> {
        let Some(source) = self.source.as_deref() else {
            return Err(ScanError::NoSource);
        };
        let matcher: &dyn Matcher = match pattern {
            PatternArg::Text(text, flags) => self.cache.get_or_compile(text, flags)?,
            PatternArg::Matcher(matcher) => {
                if !matcher.capabilities().supports(mode) {
                    return Err(ScanError::MissingCapability { mode });
                }
                matcher
            }
        };
        let at = self.pos;
        Ok(matcher
            .find_at(source, at, mode)
            .filter(|info| is_well_formed(info, source, at, mode)))
    }

    /// The matching primitive every pattern operation funnels through.
    ///
    /// Returns the byte range of the reported text. It always starts at the
    /// cursor and ends at the match start or match end.
    fn run(&mut self, pattern: PatternArg<'_>, attempt: Attempt) -> Result<Option<Range<usize>>> {
        let found = self.find(pattern, attempt.mode)?;
        let at = self.pos;

        let Some(info) = found else {
            if attempt.log {
                self.history.push(MatchRecord::failed(at));
            }
            return Ok(None);
        };

        let end = if attempt.include_match {
            info.end()
        } else {
            info.start()
        };
        let span = at..end;

        if attempt.log {
            self.history
                .push(MatchRecord::matched(at, span.clone(), info));
        }
        if attempt.consume {
            self.pos = end;
        }
        Ok(Some(span))
    }

    fn skip_line(&mut self) -> Result<bool> {
        Ok(self.skip_until(LINE_TERMINATOR)?.is_some())
    }
}

/// Reject matches an external matcher reported outside the legal region.
fn is_well_formed(info: &MatchInfo, source: &str, at: usize, mode: MatchMode) -> bool {
    let span = info.span();
    let anchored_ok = mode == MatchMode::Search || span.start == at;
    anchored_ok
        && span.start >= at
        && span.start <= span.end
        && span.end <= source.len()
        && source.is_char_boundary(span.start)
        && source.is_char_boundary(span.end)
}
