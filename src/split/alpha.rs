//! Alpha splitter: route each line to `<first letter>.txt`.
//!
//! All 26 files `a.txt` … `z.txt` are created up front, so a letter with no
//! words still yields an (empty) file. The key is the first character of
//! the raw line; nothing is trimmed or case-folded first, so `" apple"` and
//! `"Apple"` are both unclassifiable.

use std::fmt;
use std::path::Path;

use crate::config::{ALPHABET, ALPHA_FILE_COUNT};
use crate::io::{ensure_output_dir, open_src_file, LineReader, SplitPrefs};
use crate::split::outputs::{OutputSet, SplitKey};
use crate::split::{dispatch_line, reject_or_skip, KeyError, SplitError, SplitReport};

/// A lowercase ASCII letter `a..=z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlphaKey(u8);

impl AlphaKey {
    /// `Some` for `a..=z`, `None` for anything else.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(AlphaKey(c as u8))
        } else {
            None
        }
    }

    /// All 26 keys in alphabetical order.
    pub fn all() -> impl Iterator<Item = AlphaKey> {
        ALPHABET.bytes().map(AlphaKey)
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for AlphaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl SplitKey for AlphaKey {
    #[inline]
    fn slot(self) -> usize {
        (self.0 - b'a') as usize
    }
}

/// Derives the alpha key of a line (terminator already removed).
pub fn alpha_key(line: &str) -> Result<AlphaKey, KeyError> {
    let first = line.chars().next().ok_or(KeyError::Empty)?;
    AlphaKey::new(first).ok_or(KeyError::FirstChar(first))
}

/// Splits `input` into `a.txt` … `z.txt` inside `out_dir`.
///
/// The output directory and input file are checked before any output file is
/// touched. Lines keep their input order within each file.
pub fn split_alpha(
    input: &Path,
    out_dir: &Path,
    prefs: &SplitPrefs,
) -> Result<SplitReport, SplitError> {
    ensure_output_dir(out_dir)?;
    let src = open_src_file(input)?;
    let mut outputs = OutputSet::create(out_dir, AlphaKey::all())?;
    debug_assert_eq!(outputs.len(), ALPHA_FILE_COUNT);

    let mut report = SplitReport::default();
    let mut reader = LineReader::new(src);
    while let Some((line_number, line)) = reader
        .next_line()
        .map_err(|e| SplitError::io(input, e))?
    {
        report.lines_read += 1;
        match alpha_key(line) {
            Ok(key) => dispatch_line(&mut outputs, key, input, line_number, line)?,
            Err(reason) => reject_or_skip(prefs, &mut report, input, line_number, line, reason)?,
        }
    }

    report.files = outputs.finish()?;
    Ok(report)
}
