//! Scanner error types.
//!
//! Every variant is a contract violation by the caller. Nothing is retried
//! and no state is mutated before an error is returned, so a tokenizer can
//! branch on the failure and try its next alternative.

use lum_pattern::{GroupRef, MatchMode, PatternError};

/// Broad classification of a [`ScanError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The scanner was used in a way it cannot serve (no source, unusable pattern).
    Usage,
    /// A position fell outside the source.
    Range,
    /// The match history cannot answer the request.
    State,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A pattern operation ran before any source was bound.
    #[error("no source text bound to the scanner")]
    NoSource,

    /// A pre-built matcher lacks the capability the operation needs.
    #[error("pattern does not support {mode} matching")]
    MissingCapability { mode: MatchMode },

    /// A textual pattern failed to compile.
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),

    #[error("position {pos} is outside 0..={len}")]
    PositionOutOfRange { pos: usize, len: usize },

    #[error("shifting position {from} by {delta} leaves 0..={len}")]
    ShiftOutOfRange { from: usize, delta: isize, len: usize },

    #[error("position {pos} is not on a character boundary")]
    NotCharBoundary { pos: usize },

    /// A match accessor was used before any attempt was logged.
    #[error("no match attempts recorded")]
    NoMatchRecorded,

    /// A match accessor was used after a failed attempt.
    #[error("most recent match attempt failed")]
    LastMatchFailed,

    #[error("nothing to unscan")]
    NothingToUnscan,

    /// The most recent match has no such capture group.
    #[error("no group `{0}` in the most recent match")]
    NoSuchGroup(GroupRef),
}

impl ScanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::NoSource | ScanError::MissingCapability { .. } | ScanError::InvalidPattern(_) => {
                ErrorKind::Usage
            }
            ScanError::PositionOutOfRange { .. }
            | ScanError::ShiftOutOfRange { .. }
            | ScanError::NotCharBoundary { .. } => ErrorKind::Range,
            ScanError::NoMatchRecorded
            | ScanError::LastMatchFailed
            | ScanError::NothingToUnscan
            | ScanError::NoSuchGroup(_) => ErrorKind::State,
        }
    }
}

/// Result type for scanner operations.
pub type Result<T> = std::result::Result<T, ScanError>;
