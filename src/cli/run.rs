//! Post-parse dispatch shared by both binaries.
//!
//! [`main_from_env`] is everything `main()` does apart from calling
//! `std::process::exit`: parse, apply the display level, run the selected
//! splitter, report, and map the outcome to an exit status.
//! [`main_with_args`] does the same for an explicit argument list.

use std::ffi::OsString;
use std::time::Instant;

use anyhow::Context;

use crate::cli::args::{parse_args, parse_args_from, Invocation, ParsedArgs, Splitter};
use crate::cli::constants::set_display_level;
use crate::cli::help::bad_usage;
use crate::config::FAILURE_EXIT_CODE;
use crate::split::{split_alpha, split_length, SplitReport};
use crate::{displaylevel, displayout};

/// Run the splitter selected by `args`.
pub fn run(args: &ParsedArgs) -> anyhow::Result<SplitReport> {
    let start = Instant::now();
    let report = match args.splitter {
        Splitter::Alpha => split_alpha(&args.input, &args.output_dir, &args.prefs),
        Splitter::Length => split_length(&args.input, &args.output_dir, &args.prefs),
    }
    .with_context(|| {
        format!(
            "cannot split {} into {}",
            args.input.display(),
            args.output_dir.display()
        )
    })?;

    report.display(args.splitter.program());
    displaylevel!(
        3,
        "{}: done in {:.3} s\n",
        args.splitter.program(),
        start.elapsed().as_secs_f64()
    );
    Ok(report)
}

/// Parse the process arguments, run, and return the process exit status.
pub fn main_from_env(splitter: Splitter) -> i32 {
    dispatch(splitter, parse_args(splitter))
}

/// Parse `argv` (without argv[0]), run, and return the process exit status.
///
/// 0 on success, 127 on a usage error, 1 on any failure during the run.
pub fn main_with_args(splitter: Splitter, argv: &[OsString]) -> i32 {
    dispatch(splitter, parse_args_from(splitter, argv))
}

fn dispatch(splitter: Splitter, invocation: Invocation) -> i32 {
    let args = match invocation {
        Invocation::Run(args) => args,
        Invocation::Info(text) => {
            displayout!("{}", text);
            return 0;
        }
        Invocation::Usage(reason) => return bad_usage(splitter, reason.as_deref()),
    };

    set_display_level(args.display_level);
    let program = splitter.program();
    if !args.ignored.is_empty() {
        displaylevel!(
            2,
            "{}: ignoring extra arguments: {}\n",
            program,
            args.ignored
                .iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    match run(&args) {
        Ok(report) => {
            if !report.skipped.is_empty() {
                displaylevel!(
                    2,
                    "{}: warning: skipped {} unclassifiable line(s)\n",
                    program,
                    report.skipped.len()
                );
            }
            0
        }
        Err(e) => {
            displaylevel!(1, "{}: {:#}\n", program, e);
            FAILURE_EXIT_CODE
        }
    }
}
