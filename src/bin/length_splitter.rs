//! `length_splitter <in.txt> <out_length_dir>`
//!
//! Writes every line of `in.txt` to `<N>.txt` in `out_length_dir`, where `N`
//! is the line's length after trimming whitespace. Files `1.txt` … `M.txt`
//! are created for the longest length `M` in the input.

use wordsplit::cli::{main_from_env, Splitter};

fn main() {
    std::process::exit(main_from_env(Splitter::Length));
}
