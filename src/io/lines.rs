//! Line-at-a-time reading of a word list.
//!
//! [`LineReader`] reuses one `String` buffer across calls and hands out each
//! line with its `\n` or `\r\n` terminator removed, together with its 1-based
//! line number. A last line without a terminator is still returned.

use std::io::{self, BufRead};

/// Sequential line reader over any [`BufRead`].
pub struct LineReader<R> {
    inner: R,
    buf: String,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        LineReader {
            inner,
            buf: String::new(),
            line_number: 0,
        }
    }

    /// Reads the next line.
    ///
    /// Returns `Ok(None)` at end of input. Invalid UTF-8 is reported as
    /// [`io::ErrorKind::InvalidData`] by the underlying `read_line`.
    pub fn next_line(&mut self) -> io::Result<Option<(usize, &str)>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        let line = strip_terminator(&self.buf);
        Ok(Some((self.line_number, line)))
    }
}

/// Removes one trailing `\n` and, if present, the `\r` before it.
pub fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}
