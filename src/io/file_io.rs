//! File primitives shared by both splitters.
//!
//! - [`open_src_file`] opens the word list for one sequential pass, rejecting
//!   directories up front so the error names the path rather than surfacing
//!   as an `EISDIR` from the first read.
//! - [`ensure_output_dir`] checks that the output path is an existing
//!   directory before any output file is created.
//! - [`create_dst_file`] creates (or truncates) one output file.
//!
//! Failures are returned as [`SplitError::Io`] carrying the offending path.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use crate::displaylevel;
use crate::split::SplitError;

/// Returns `true` if `path` exists and is a directory. Symlinks are followed.
pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}

/// Opens `path` for buffered sequential reading.
///
/// A directory is reported as [`io::ErrorKind::InvalidInput`].
pub fn open_src_file(path: &Path) -> Result<BufReader<File>, SplitError> {
    if is_directory(path) {
        return Err(SplitError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
        ));
    }
    displaylevel!(4, "Reading {}\n", path.display());
    let f = File::open(path).map_err(|e| SplitError::io(path, e))?;
    Ok(BufReader::new(f))
}

/// Fails with [`SplitError::NotADirectory`] unless `path` is an existing directory.
///
/// A path that does not exist at all is reported as an I/O `NotFound` error.
pub fn ensure_output_dir(path: &Path) -> Result<(), SplitError> {
    let meta = fs::metadata(path).map_err(|e| SplitError::io(path, e))?;
    if !meta.is_dir() {
        return Err(SplitError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Creates `path`, truncating any existing file, wrapped in a [`BufWriter`].
pub fn create_dst_file(path: &Path) -> Result<BufWriter<File>, SplitError> {
    let f = File::create(path).map_err(|e| SplitError::io(path, e))?;
    displaylevel!(4, "Created {}\n", path.display());
    Ok(BufWriter::new(f))
}
