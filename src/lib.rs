// wordsplit: split a newline-delimited word list into per-key files.
//
// Two pipelines share this library:
//   - alpha:  one pass, 26 fixed files `a.txt` .. `z.txt` keyed by first letter
//   - length: scan pass + dispatch pass, files `1.txt` .. `N.txt` keyed by trimmed length

pub mod cli;
pub mod config;
pub mod io;
pub mod split;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use io::{InvalidLinePolicy, SplitPrefs};
pub use split::{
    alpha_key, length_key, scan_max_length, split_alpha, split_length, KeyError, SplitError,
    SplitReport,
};
