// cli/help.rs: Usage text and the bad-usage exit path.

use crate::cli::args::Splitter;
use crate::cli::constants::INPUT_PLACEHOLDER;
use crate::config::USAGE_EXIT_CODE;
use crate::{displaylevel, displayout};

/// The one-line syntax, e.g. `Syntax: alpha_splitter <in.txt> <out_alpha_dir>`.
pub fn usage_line(splitter: Splitter) -> String {
    format!(
        "Syntax: {} {} {}",
        splitter.program(),
        INPUT_PLACEHOLDER,
        splitter.dir_placeholder()
    )
}

/// Print the syntax line to stdout.
pub fn print_usage(splitter: Splitter) {
    displayout!("{}\n", usage_line(splitter));
}

/// Report a usage error and return the status the process should exit with.
///
/// The optional `reason` goes to stderr at level 1; the syntax line always
/// goes to stdout. No file is touched.
pub fn bad_usage(splitter: Splitter, reason: Option<&str>) -> i32 {
    if let Some(reason) = reason {
        displaylevel!(1, "{}: {}\n", splitter.program(), reason);
    }
    print_usage(splitter);
    USAGE_EXIT_CODE
}
