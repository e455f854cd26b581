//! File I/O for the splitters: preferences, file primitives, and line reading.

pub mod file_io;
pub mod lines;
pub mod prefs;

pub use file_io::{create_dst_file, ensure_output_dir, is_directory, open_src_file};
pub use lines::LineReader;
pub use prefs::{InvalidLinePolicy, SplitPrefs};
