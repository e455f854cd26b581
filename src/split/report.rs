// split/report.rs: Summary of one split run.

use std::path::PathBuf;

use crate::displaylevel;

/// One output file after the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    /// The routing key as it appears in the file name (`a`, `12`).
    pub key: String,
    pub path: PathBuf,
    pub lines: usize,
}

/// What a completed run read and wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Lines read in the dispatch pass.
    pub lines_read: usize,
    /// 1-based line numbers left out under the `Skip` policy.
    pub skipped: Vec<usize>,
    /// Every created file in key order, including empty ones.
    pub files: Vec<FileSummary>,
}

impl SplitReport {
    pub fn files_created(&self) -> usize {
        self.files.len()
    }

    /// Total lines written across all files.
    pub fn lines_written(&self) -> usize {
        self.files.iter().map(|f| f.lines).sum()
    }

    /// Prints the summary at display level 3 and per-file counts at level 4.
    pub fn display(&self, program: &str) {
        displaylevel!(
            3,
            "{}: {} lines read, {} written to {} files, {} skipped\n",
            program,
            self.lines_read,
            self.lines_written(),
            self.files_created(),
            self.skipped.len()
        );
        for f in &self.files {
            displaylevel!(4, "  {:>8}  {}\n", f.lines, f.path.display());
        }
    }
}
