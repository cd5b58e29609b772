//! Polymorphic pattern arguments.
//!
//! Scanner operations take `impl Into<PatternArg>`, so callers pass plain
//! pattern text, text with flags, or a pre-built matcher. Owned strings go
//! in as `pattern.as_str()`:
//!
//! ```text
//! scanner.scan(r"\d+")?;
//! scanner.scan((r"select", PatternFlags::CASE_INSENSITIVE))?;
//! scanner.scan(&Literal::new("//"))?;
//! ```

use lum_pattern::{Matcher, PatternFlags};

/// A pattern as accepted by scanner operations.
#[derive(Clone, Copy)]
pub enum PatternArg<'p> {
    /// Pattern text, compiled through the scanner's cache.
    Text(&'p str, PatternFlags),
    /// A pre-built matcher, used directly.
    Matcher(&'p dyn Matcher),
}

impl<'p> PatternArg<'p> {
    /// Wrap a matcher trait object.
    pub fn matcher(matcher: &'p dyn Matcher) -> Self {
        PatternArg::Matcher(matcher)
    }
}

impl<'p> From<&'p str> for PatternArg<'p> {
    fn from(text: &'p str) -> Self {
        PatternArg::Text(text, PatternFlags::empty())
    }
}

impl<'p> From<(&'p str, PatternFlags)> for PatternArg<'p> {
    fn from((text, flags): (&'p str, PatternFlags)) -> Self {
        PatternArg::Text(text, flags)
    }
}

impl<'p, M: Matcher> From<&'p M> for PatternArg<'p> {
    fn from(matcher: &'p M) -> Self {
        PatternArg::Matcher(matcher)
    }
}
