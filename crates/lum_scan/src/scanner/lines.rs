//! Line-oriented queries: line boundaries, line/column location, and
//! line skipping. `\r\n`, lone `\r` and lone `\n` all terminate lines.

use std::fmt;

use memchr::memmem;

use super::ScanCursor;
use crate::{Result, ScanError};

/// 1-based line and column of the cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    /// Byte column within the line.
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl ScanCursor {
    /// Whether the cursor is at the start of a line.
    ///
    /// True at offset 0 or right after a terminator. A `\r` directly followed
    /// by `\n` is the first half of a CRLF, so the cursor between the two is
    /// not at a line start.
    pub fn bol(&self) -> bool {
        let bytes = self.text().as_bytes();
        match self.pos.checked_sub(1).map(|prev| bytes[prev]) {
            None | Some(b'\n') => true,
            Some(b'\r') => bytes.get(self.pos).copied() != Some(b'\n'),
            Some(_) => false,
        }
    }

    /// Whether the cursor is at the end of a line.
    ///
    /// True at the end of the source or right before a terminator. A `\n`
    /// preceded by `\r` is the second half of a CRLF, so the cursor between
    /// the two is not at a line end.
    pub fn eol(&self) -> bool {
        let bytes = self.text().as_bytes();
        match bytes.get(self.pos).copied() {
            None | Some(b'\r') => true,
            Some(b'\n') => self.pos == 0 || bytes[self.pos - 1] != b'\r',
            Some(_) => false,
        }
    }

    /// Line and column of the cursor.
    ///
    /// The terminator style is taken from the consumed text: CRLF if it
    /// contains one, else LF, else CR. Only that style is counted, so text
    /// mixing styles reports positions relative to the first style found.
    ///
    /// The column is the offset minus the index of the last terminator, so
    /// after a CRLF the first column is 2.
    pub fn location(&self) -> Result<Location> {
        let Some(source) = self.source.as_deref() else {
            return Err(ScanError::NoSource);
        };
        let consumed = source[..self.pos].as_bytes();

        let terminator: &[u8] = if memmem::find(consumed, b"\r\n").is_some() {
            b"\r\n"
        } else if memchr::memchr(b'\n', consumed).is_some() {
            b"\n"
        } else {
            b"\r"
        };

        let line = memmem::find_iter(consumed, terminator).count() + 1;
        let column = memmem::rfind(consumed, terminator).map_or(self.pos + 1, |index| self.pos - index);
        Ok(Location { line, column })
    }

    /// Skip past the next `n` line terminators.
    ///
    /// Returns how many lines were actually skipped, fewer than `n` when the
    /// source runs out. Not logged.
    pub fn skip_lines(&mut self, n: usize) -> Result<usize> {
        for skipped in 0..n {
            if !self.skip_line()? {
                return Ok(skipped);
            }
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests;
