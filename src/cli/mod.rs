//! Command-line interface for `alpha_splitter` and `length_splitter`.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program names, usage placeholders, the `DISPLAY_LEVEL` atomic and `displaylevel!` macros. |
//! | [`help`]      | Syntax line and the exit-127 bad-usage path. |
//! | [`args`]      | `Splitter`, `ParsedArgs`, and the clap-backed `parse_args_from`. |
//! | [`run`]       | Dispatch to the selected splitter and exit-status mapping; `main_from_env` reads `args_os`. |
//!
//! Typical call sequence: `parse_args_from` → `run` → exit with the returned status.

pub mod args;
pub mod constants;
pub mod help;
pub mod run;

pub use args::{parse_args, parse_args_from, Invocation, ParsedArgs, Splitter};
pub use run::{main_from_env, main_with_args, run};
