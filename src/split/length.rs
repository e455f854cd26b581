//! Length splitter: route each line to `<trimmed length>.txt`.
//!
//! Runs in two passes over the input. The scan pass finds the largest
//! trimmed length `N`; the prepare step creates `1.txt` … `N.txt`; the
//! dispatch pass re-opens the input and writes each line, untrimmed, to the
//! file for its trimmed length.
//!
//! Both passes measure the same way: leading and trailing whitespace is
//! trimmed and the remaining Unicode scalar values are counted. The line
//! terminator is never counted, so no unused file is allocated for it.

use std::fmt;
use std::path::Path;

use crate::io::{ensure_output_dir, open_src_file, LineReader, SplitPrefs};
use crate::split::outputs::{OutputSet, SplitKey};
use crate::split::{dispatch_line, reject_or_skip, KeyError, SplitError, SplitReport};

/// A trimmed line length, always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LengthKey(usize);

impl LengthKey {
    /// `None` for 0, which no output file represents.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(LengthKey(len))
        }
    }

    /// Keys `1..=max`, empty when `max == 0`.
    pub fn range(max: usize) -> impl Iterator<Item = LengthKey> {
        (1..=max).map(LengthKey)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for LengthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SplitKey for LengthKey {
    #[inline]
    fn slot(self) -> usize {
        self.0 - 1
    }
}

/// Character count of `line` after trimming surrounding whitespace.
pub fn length_key(line: &str) -> usize {
    line.trim().chars().count()
}

/// Derives the output key of a line; blank lines have none.
pub fn classify_length(line: &str) -> Result<LengthKey, KeyError> {
    LengthKey::new(length_key(line)).ok_or(KeyError::Blank)
}

/// Result of the scan pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthScan {
    pub max_length: usize,
    pub lines: usize,
    /// Line number and text of the first blank line, if any.
    pub first_blank: Option<(usize, String)>,
}

/// Scan pass: reads all of `input` once and measures every line.
pub fn scan_lengths(input: &Path) -> Result<LengthScan, SplitError> {
    let mut reader = LineReader::new(open_src_file(input)?);
    let mut scan = LengthScan::default();
    while let Some((line_number, line)) = reader
        .next_line()
        .map_err(|e| SplitError::io(input, e))?
    {
        scan.lines += 1;
        let len = length_key(line);
        if len == 0 && scan.first_blank.is_none() {
            scan.first_blank = Some((line_number, line.to_owned()));
        }
        scan.max_length = scan.max_length.max(len);
    }
    Ok(scan)
}

/// Largest trimmed line length in `input`; 0 for an empty file.
pub fn scan_max_length(input: &Path) -> Result<usize, SplitError> {
    scan_lengths(input).map(|scan| scan.max_length)
}

/// Splits `input` into `1.txt` … `N.txt` inside `out_dir`.
///
/// Under [`InvalidLinePolicy::Reject`](crate::io::InvalidLinePolicy::Reject)
/// a blank line is reported from the scan pass, before any output file is
/// created. An empty input creates no files.
pub fn split_length(
    input: &Path,
    out_dir: &Path,
    prefs: &SplitPrefs,
) -> Result<SplitReport, SplitError> {
    ensure_output_dir(out_dir)?;

    let scan = scan_lengths(input)?;
    if !prefs.skips_invalid() {
        if let Some((line_number, line)) = scan.first_blank {
            return Err(SplitError::Unclassifiable {
                path: input.to_path_buf(),
                line_number,
                line,
                reason: KeyError::Blank,
            });
        }
    }

    let mut outputs = OutputSet::create(out_dir, LengthKey::range(scan.max_length))?;

    let mut report = SplitReport::default();
    let mut reader = LineReader::new(open_src_file(input)?);
    while let Some((line_number, line)) = reader
        .next_line()
        .map_err(|e| SplitError::io(input, e))?
    {
        report.lines_read += 1;
        match classify_length(line) {
            Ok(key) => dispatch_line(&mut outputs, key, input, line_number, line)?,
            Err(reason) => reject_or_skip(prefs, &mut report, input, line_number, line, reason)?,
        }
    }

    report.files = outputs.finish()?;
    Ok(report)
}
