//! Command-line argument parsing shared by `alpha_splitter` and `length_splitter`.
//!
//! Both programs take the same arguments:
//!
//! ```text
//! <program> [-v]... [-q]... [--skip-invalid] <in.txt> <out_dir>
//! ```
//!
//! Parsing never exits the process. [`parse_args_from`] returns an
//! [`Invocation`] and the caller decides what to print and which status to
//! exit with. Missing positionals are not a clap error here; they are
//! reported as [`Invocation::Usage`] so the program can print its one-line
//! syntax and exit 127.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};

use crate::cli::constants::{
    level_from_flags, ALPHA_DIR_PLACEHOLDER, ALPHA_SPLITTER, LENGTH_DIR_PLACEHOLDER,
    LENGTH_SPLITTER,
};
use crate::io::{InvalidLinePolicy, SplitPrefs};

/// Which of the two programs is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splitter {
    Alpha,
    Length,
}

impl Splitter {
    pub fn program(self) -> &'static str {
        match self {
            Splitter::Alpha => ALPHA_SPLITTER,
            Splitter::Length => LENGTH_SPLITTER,
        }
    }

    pub fn dir_placeholder(self) -> &'static str {
        match self {
            Splitter::Alpha => ALPHA_DIR_PLACEHOLDER,
            Splitter::Length => LENGTH_DIR_PLACEHOLDER,
        }
    }

    fn about(self) -> &'static str {
        match self {
            Splitter::Alpha => "Split a word list into a.txt .. z.txt by first letter",
            Splitter::Length => "Split a word list into 1.txt .. N.txt by trimmed word length",
        }
    }
}

#[derive(Parser, Debug)]
#[command(version)]
struct SplitterCli {
    /// Word list, one word per line
    #[arg(value_name = "IN_TXT")]
    input: Option<PathBuf>,

    /// Existing directory that receives the output files
    #[arg(value_name = "OUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Further positionals are accepted and ignored
    #[arg(hide = true)]
    extra: Vec<OsString>,

    /// More output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Less output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    quiet: u8,

    /// Leave unclassifiable lines out instead of failing
    #[arg(long)]
    skip_invalid: bool,
}

/// Options for one split run.
#[derive(Debug, Clone)]
pub struct ParsedArgs {
    pub splitter: Splitter,
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Display level derived from `-v` / `-q`.
    pub display_level: u32,
    pub prefs: SplitPrefs,
    /// Positionals after the first two.
    pub ignored: Vec<OsString>,
}

/// Outcome of argument parsing.
#[derive(Debug)]
pub enum Invocation {
    Run(ParsedArgs),
    /// `--help` or `--version`: print this text to stdout and exit 0.
    Info(String),
    /// Too few positionals or a bad option; the reason, if any, is a
    /// one-line clap diagnostic.
    Usage(Option<String>),
}

/// Parse `std::env::args_os()` (skipping argv[0]).
///
/// Arguments are read as `OsString`, so a file name that is not valid UTF-8
/// reaches the splitter unchanged.
pub fn parse_args(splitter: Splitter) -> Invocation {
    let argv: Vec<OsString> = std::env::args_os().skip(1).collect();
    parse_args_from(splitter, &argv)
}

/// Parse an explicit argument list (argv[1..]).
///
/// Callable from tests without touching `std::env`.
pub fn parse_args_from(splitter: Splitter, argv: &[OsString]) -> Invocation {
    let program = splitter.program();
    let command = SplitterCli::command()
        .name(program)
        .bin_name(program)
        .about(splitter.about());

    let full = std::iter::once(OsString::from(program)).chain(argv.iter().cloned());
    let cli = match command
        .try_get_matches_from(full)
        .and_then(|m| SplitterCli::from_arg_matches(&m))
    {
        Ok(cli) => cli,
        Err(e) => return from_clap_error(e),
    };

    let (input, output_dir) = match (cli.input, cli.output_dir) {
        (Some(input), Some(output_dir)) => (input, output_dir),
        _ => return Invocation::Usage(None),
    };

    let policy = if cli.skip_invalid {
        InvalidLinePolicy::Skip
    } else {
        InvalidLinePolicy::Reject
    };

    Invocation::Run(ParsedArgs {
        splitter,
        input,
        output_dir,
        display_level: level_from_flags(cli.verbose, cli.quiet),
        prefs: SplitPrefs::new().with_invalid_lines(policy),
        ignored: cli.extra,
    })
}

fn from_clap_error(e: clap::Error) -> Invocation {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            Invocation::Info(e.render().to_string())
        }
        _ => {
            let rendered = e.render().to_string();
            let first = rendered.lines().next().unwrap_or_default().trim().to_owned();
            Invocation::Usage(if first.is_empty() { None } else { Some(first) })
        }
    }
}
