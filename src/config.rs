// config.rs: Compile-time configuration constants.
//
// Nothing here is read from the environment; the splitters take all runtime
// choices from the command line (see `crate::io::prefs`).

// Keys of the alpha splitter, in output order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

// Number of files the alpha splitter always creates.
pub const ALPHA_FILE_COUNT: usize = 26;

// Extension appended to every output key (`a.txt`, `12.txt`).
pub const OUTPUT_EXTENSION: &str = ".txt";

// Exit status for a usage error (too few positional arguments).
pub const USAGE_EXIT_CODE: i32 = 127;

// Exit status for any failure after argument parsing succeeded.
pub const FAILURE_EXIT_CODE: i32 = 1;

// 0 = silent; 1 = errors only; 2 = normal; 3 = verbose summary; 4 = per-file detail
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;
