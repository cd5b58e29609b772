//! Match records and the two-slot match history.
//!
//! Only the newest two records are retained: enough to answer accessor
//! queries about the latest attempt and to undo exactly one logged
//! operation.

use std::ops::Range;

use lum_pattern::MatchInfo;

/// Outcome of one logged match attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    /// Cursor offset when the attempt ran.
    offset: usize,
    /// `None` for a failed attempt.
    outcome: Option<Outcome>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Outcome {
    /// Byte range of the text the operation reports (may differ from the
    /// raw match for `*_to` / `*_until` operations).
    pub(crate) span: Range<usize>,
    pub(crate) info: MatchInfo,
}

impl MatchRecord {
    pub(crate) fn failed(offset: usize) -> Self {
        Self {
            offset,
            outcome: None,
        }
    }

    pub(crate) fn matched(offset: usize, span: Range<usize>, info: MatchInfo) -> Self {
        Self {
            offset,
            outcome: Some(Outcome { span, info }),
        }
    }

    /// Cursor offset when the attempt ran.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_match(&self) -> bool {
        self.outcome.is_some()
    }

    /// Byte range of the matched text, `None` for a failed attempt.
    pub fn span(&self) -> Option<Range<usize>> {
        self.outcome.as_ref().map(|outcome| outcome.span.clone())
    }

    /// Raw match information, `None` for a failed attempt.
    pub fn info(&self) -> Option<&MatchInfo> {
        self.outcome.as_ref().map(|outcome| &outcome.info)
    }

    pub(crate) fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }
}

/// The current and previous match records.
#[derive(Clone, Debug, Default)]
pub(crate) struct History {
    current: Option<MatchRecord>,
    previous: Option<MatchRecord>,
    /// Set by `rewind`, cleared by the next `push`. Blocks a second
    /// consecutive rewind.
    rewound: bool,
}

impl History {
    pub(crate) fn push(&mut self, record: MatchRecord) {
        self.previous = self.current.replace(record);
        self.rewound = false;
    }

    pub(crate) fn current(&self) -> Option<&MatchRecord> {
        self.current.as_ref()
    }

    pub(crate) fn previous(&self) -> Option<&MatchRecord> {
        self.previous.as_ref()
    }

    /// Drop the current record, promote the previous one, and return the
    /// offset to restore.
    ///
    /// Returns `None` when there is nothing to undo or the last operation
    /// was already a rewind.
    pub(crate) fn rewind(&mut self) -> Option<usize> {
        if self.rewound {
            return None;
        }
        let undone = self.current.take()?;
        self.current = self.previous.take();
        self.rewound = true;
        Some(undone.offset)
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
