//! The key-to-file mapping shared by both splitters.
//!
//! An [`OutputSet`] owns one buffered writer per key. Keys are dense: every
//! key maps to a slot index (`a` → 0, `1` → 0, ...), and the set holds
//! exactly the slots `0..len`, so routing a line is a bounds-checked index.
//!
//! Files are created (and truncated) eagerly in [`OutputSet::create`], even
//! for keys that never receive a line. [`OutputSet::finish`] flushes every
//! writer and reports per-file line counts; if a run aborts early the set is
//! dropped and each `BufWriter` flushes and closes on drop.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::OUTPUT_EXTENSION;
use crate::io::create_dst_file;
use crate::split::report::FileSummary;
use crate::split::SplitError;

/// A routing key with a dense slot index.
///
/// `Display` supplies the output file stem (`a` → `a.txt`, `7` → `7.txt`).
pub trait SplitKey: Copy + fmt::Display {
    fn slot(self) -> usize;
}

/// File name for `key` inside an output directory.
pub fn file_name_for<K: SplitKey>(key: K) -> String {
    format!("{}{}", key, OUTPUT_EXTENSION)
}

/// One open output file.
pub struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
    lines: usize,
}

impl OutputFile {
    /// Writes `line` followed by `\n`.
    pub fn write_line(&mut self, line: &str) -> Result<(), SplitError> {
        self.writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|e| SplitError::io(&self.path, e))?;
        self.lines += 1;
        Ok(())
    }
}

/// Exclusively owned output files, one per key, in key order.
pub struct OutputSet<K: SplitKey> {
    keys: Vec<K>,
    files: Vec<OutputFile>,
}

impl<K: SplitKey> OutputSet<K> {
    /// Creates `<key>.txt` in `dir` for every key, in order.
    ///
    /// `keys` must be dense and ascending by slot (`keys[i].slot() == i`).
    /// On error, files created so far are closed and left on disk.
    pub fn create<I>(dir: &Path, keys: I) -> Result<Self, SplitError>
    where
        I: IntoIterator<Item = K>,
    {
        let mut set = OutputSet {
            keys: Vec::new(),
            files: Vec::new(),
        };
        for key in keys {
            debug_assert_eq!(key.slot(), set.files.len(), "output keys must be dense");
            let path = dir.join(file_name_for(key));
            let writer = create_dst_file(&path)?;
            set.keys.push(key);
            set.files.push(OutputFile {
                path,
                writer,
                lines: 0,
            });
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The output file for `key`, or `None` if the key is outside the set.
    pub fn get_mut(&mut self, key: K) -> Option<&mut OutputFile> {
        self.files.get_mut(key.slot())
    }

    /// Flushes and closes every file, returning their line counts in key order.
    pub fn finish(self) -> Result<Vec<FileSummary>, SplitError> {
        let mut summaries = Vec::with_capacity(self.files.len());
        for (key, file) in self.keys.into_iter().zip(self.files) {
            let OutputFile {
                path,
                mut writer,
                lines,
            } = file;
            writer.flush().map_err(|e| SplitError::io(&path, e))?;
            drop(writer);
            summaries.push(FileSummary {
                key: key.to_string(),
                path,
                lines,
            });
        }
        Ok(summaries)
    }
}
