// split/error.rs: Error taxonomy for the splitter pipelines.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Why a line could not be routed to an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// Alpha splitter: the line has no first character.
    Empty,
    /// Alpha splitter: the first character is outside `a..=z`.
    FirstChar(char),
    /// Length splitter: the line is empty once whitespace is trimmed.
    Blank,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::Empty => f.write_str("empty line has no first letter"),
            KeyError::FirstChar(c) => {
                write!(f, "first character {:?} is not a lowercase letter a-z", c)
            }
            KeyError::Blank => f.write_str("line is blank after trimming whitespace"),
        }
    }
}

impl std::error::Error for KeyError {}

/// Any failure that aborts a split run.
///
/// No variant is recoverable: the pipelines stop at the first error, and
/// already-open output files are closed as they are dropped.
#[derive(Debug)]
pub enum SplitError {
    /// Reading the input or creating/writing an output file failed.
    Io { path: PathBuf, source: io::Error },
    /// The output path exists but is not a directory.
    NotADirectory(PathBuf),
    /// A line's key could not be derived and the policy is `Reject`.
    Unclassifiable {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: KeyError,
    },
    /// A dispatched line's key has no output file, which happens only when
    /// the input grew between the scan and dispatch passes.
    MissingHandle {
        path: PathBuf,
        line_number: usize,
        key: String,
    },
}

impl SplitError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        SplitError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The [`io::ErrorKind`] of an [`SplitError::Io`], `None` for every other variant.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            SplitError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            SplitError::NotADirectory(path) => write!(f, "{}: not a directory", path.display()),
            SplitError::Unclassifiable {
                path,
                line_number,
                line,
                reason,
            } => write!(
                f,
                "{}:{}: cannot classify line {:?}: {}",
                path.display(),
                line_number,
                line,
                reason
            ),
            SplitError::MissingHandle {
                path,
                line_number,
                key,
            } => write!(
                f,
                "{}:{}: no output file for key {} (input changed between passes)",
                path.display(),
                line_number,
                key
            ),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::Io { source, .. } => Some(source),
            SplitError::Unclassifiable { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
