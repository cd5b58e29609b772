//! Errors raised while preparing patterns.

/// A textual pattern could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The pattern text is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {message}")]
    Invalid { pattern: Box<str>, message: String },
}
