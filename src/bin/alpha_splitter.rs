//! `alpha_splitter <in.txt> <out_alpha_dir>`
//!
//! Writes every line of `in.txt` to `<first letter>.txt` in `out_alpha_dir`,
//! always creating all 26 files `a.txt` … `z.txt`.

use wordsplit::cli::{main_from_env, Splitter};

fn main() {
    std::process::exit(main_from_env(Splitter::Alpha));
}
