// cli/constants.rs: Program identity strings and the shared display level.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::DISPLAY_LEVEL_DEFAULT;

// ── Program identity ──────────────────────────────────────────────────────────
pub const ALPHA_SPLITTER: &str = "alpha_splitter";
pub const LENGTH_SPLITTER: &str = "length_splitter";
pub const INPUT_PLACEHOLDER: &str = "<in.txt>";
pub const ALPHA_DIR_PLACEHOLDER: &str = "<out_alpha_dir>";
pub const LENGTH_DIR_PLACEHOLDER: &str = "<out_length_dir>";

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal (warnings); 3 = verbose summary; 4 = per-file detail
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Applies `-v` / `-q` counts to the default level, saturating at 0.
pub fn level_from_flags(verbose: u8, quiet: u8) -> u32 {
    (DISPLAY_LEVEL_DEFAULT + verbose as u32).saturating_sub(quiet as u32)
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
//   displayout!(...)      → stdout, unconditional
//   displaylevel!(l, ...) → stderr when display_level() >= l

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
