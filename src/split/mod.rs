//! The two splitting pipelines and the pieces they share.
//!
//! | Submodule   | Responsibility |
//! |-------------|----------------|
//! | [`alpha`]   | First-letter key, `split_alpha` (single pass, 26 fixed files). |
//! | [`length`]  | Trimmed-length key, scan pass, `split_length` (two passes, `1..=N` files). |
//! | [`outputs`] | `OutputSet`: dense key → buffered file mapping, created eagerly, closed on finish or drop. |
//! | [`report`]  | `SplitReport` returned by a successful run. |
//! | [`error`]   | `SplitError` / `KeyError`. |

pub mod alpha;
pub mod error;
pub mod length;
pub mod outputs;
pub mod report;

use std::path::Path;

pub use alpha::{alpha_key, split_alpha, AlphaKey};
pub use error::{KeyError, SplitError};
pub use length::{length_key, scan_lengths, scan_max_length, split_length, LengthKey, LengthScan};
pub use outputs::{OutputSet, SplitKey};
pub use report::{FileSummary, SplitReport};

use crate::displaylevel;
use crate::io::SplitPrefs;

/// Writes `line` to the file for `key`.
///
/// A key outside the set is reported as [`SplitError::MissingHandle`].
pub(crate) fn dispatch_line<K: SplitKey>(
    outputs: &mut OutputSet<K>,
    key: K,
    input: &Path,
    line_number: usize,
    line: &str,
) -> Result<(), SplitError> {
    match outputs.get_mut(key) {
        Some(file) => file.write_line(line),
        None => Err(SplitError::MissingHandle {
            path: input.to_path_buf(),
            line_number,
            key: key.to_string(),
        }),
    }
}

/// Applies the invalid-line policy to an unclassifiable line.
pub(crate) fn reject_or_skip(
    prefs: &SplitPrefs,
    report: &mut SplitReport,
    input: &Path,
    line_number: usize,
    line: &str,
    reason: KeyError,
) -> Result<(), SplitError> {
    if !prefs.skips_invalid() {
        return Err(SplitError::Unclassifiable {
            path: input.to_path_buf(),
            line_number,
            line: line.to_owned(),
            reason,
        });
    }
    displaylevel!(
        3,
        "{}:{}: skipping {:?}: {}\n",
        input.display(),
        line_number,
        line,
        reason
    );
    report.skipped.push(line_number);
    Ok(())
}
