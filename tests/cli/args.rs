// Argument parsing through the public `parse_args_from` entry point.

use std::ffi::OsString;
use std::path::PathBuf;

use wordsplit::cli::{parse_args_from, Invocation, Splitter};
use wordsplit::cli::help::usage_line;
use wordsplit::InvalidLinePolicy;

fn argv(args: &[&str]) -> Vec<OsString> {
    args.iter().map(|s| OsString::from(*s)).collect()
}

#[test]
fn both_splitters_accept_the_same_arguments() {
    for splitter in [Splitter::Alpha, Splitter::Length] {
        match parse_args_from(splitter, &argv(&["words.txt", "out_dir"])) {
            Invocation::Run(a) => {
                assert_eq!(a.splitter, splitter);
                assert_eq!(a.input, PathBuf::from("words.txt"));
                assert_eq!(a.output_dir, PathBuf::from("out_dir"));
                assert_eq!(a.prefs.invalid_lines, InvalidLinePolicy::Reject);
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }
}

#[test]
fn one_positional_is_a_usage_error() {
    assert!(matches!(
        parse_args_from(Splitter::Alpha, &argv(&["words.txt"])),
        Invocation::Usage(None)
    ));
}

#[test]
fn flags_alone_are_a_usage_error() {
    assert!(matches!(
        parse_args_from(Splitter::Length, &argv(&["-v", "--skip-invalid"])),
        Invocation::Usage(None)
    ));
}

#[test]
fn double_dash_allows_dash_prefixed_paths() {
    match parse_args_from(Splitter::Alpha, &argv(&["--", "-in.txt", "out"])) {
        Invocation::Run(a) => assert_eq!(a.input, PathBuf::from("-in.txt")),
        other => panic!("expected Run, got {other:?}"),
    }
}

#[test]
fn usage_lines_name_the_program() {
    assert!(usage_line(Splitter::Alpha).starts_with("Syntax: alpha_splitter "));
    assert!(usage_line(Splitter::Length).ends_with("<out_length_dir>"));
}
