// Length splitter: scan pass, dynamic file range, and blank lines.

use std::fs;

use wordsplit::split::{scan_lengths, scan_max_length, split_length, KeyError, SplitError};
use wordsplit::{InvalidLinePolicy, SplitPrefs};

use super::support::{listing, read, scratch, words};

#[test]
fn example_scenario() {
    let s = scratch(&words(&["a", "bb", "ccc", "d"]));
    let report = split_length(&s.input, &s.out, &SplitPrefs::new()).unwrap();

    assert_eq!(listing(&s.out), vec!["1.txt", "2.txt", "3.txt"]);
    assert_eq!(read(&s.out, "1.txt"), "a\nd\n");
    assert_eq!(read(&s.out, "2.txt"), "bb\n");
    assert_eq!(read(&s.out, "3.txt"), "ccc\n");
    assert_eq!(report.files_created(), 3);
    assert_eq!(report.lines_written(), 4);
}

#[test]
fn empty_input_creates_no_files() {
    let s = scratch("");
    let report = split_length(&s.input, &s.out, &SplitPrefs::new()).unwrap();
    assert!(listing(&s.out).is_empty());
    assert_eq!(report.files_created(), 0);
    assert_eq!(report.lines_read, 0);
}

#[test]
fn gaps_in_lengths_still_get_empty_files() {
    let s = scratch(&words(&["a", "abcd"]));
    split_length(&s.input, &s.out, &SplitPrefs::new()).unwrap();
    assert_eq!(listing(&s.out), vec!["1.txt", "2.txt", "3.txt", "4.txt"]);
    assert_eq!(read(&s.out, "2.txt"), "");
    assert_eq!(read(&s.out, "3.txt"), "");
    assert_eq!(read(&s.out, "4.txt"), "abcd\n");
}

#[test]
fn scan_and_dispatch_measure_the_same_trimmed_length() {
    // The terminator and surrounding whitespace never add a file.
    let s = scratch("  ab  \r\nxyz\n");
    assert_eq!(scan_max_length(&s.input).unwrap(), 3);

    split_length(&s.input, &s.out, &SplitPrefs::new()).unwrap();
    assert_eq!(listing(&s.out), vec!["1.txt", "2.txt", "3.txt"]);
    // The line itself is written as read, minus its terminator.
    assert_eq!(read(&s.out, "2.txt"), "  ab  \n");
    assert_eq!(read(&s.out, "3.txt"), "xyz\n");
}

#[test]
fn lengths_count_characters() {
    let s = scratch(&words(&["über", "日本語"]));
    split_length(&s.input, &s.out, &SplitPrefs::new()).unwrap();
    assert_eq!(read(&s.out, "3.txt"), "日本語\n");
    assert_eq!(read(&s.out, "4.txt"), "über\n");
}

#[test]
fn scan_reports_first_blank_line() {
    let s = scratch("one\n   \n\nthree\n");
    let scan = scan_lengths(&s.input).unwrap();
    assert_eq!(scan.lines, 4);
    assert_eq!(scan.max_length, 5);
    assert_eq!(scan.first_blank, Some((2, "   ".to_owned())));
}

#[test]
fn blank_line_is_rejected_before_outputs_are_created() {
    let s = scratch("word\n\nother\n");
    fs::write(s.out.join("1.txt"), "keep\n").unwrap();

    let err = split_length(&s.input, &s.out, &SplitPrefs::new()).unwrap_err();
    match &err {
        SplitError::Unclassifiable {
            line_number, reason, ..
        } => {
            assert_eq!(*line_number, 2);
            assert_eq!(*reason, KeyError::Blank);
        }
        other => panic!("expected Unclassifiable, got {other:?}"),
    }
    assert_eq!(listing(&s.out), vec!["1.txt"]);
    assert_eq!(read(&s.out, "1.txt"), "keep\n");
}

#[test]
fn skip_policy_drops_blank_lines() {
    let s = scratch("ab\n\n  \ncd\n");
    let prefs = SplitPrefs::new().with_invalid_lines(InvalidLinePolicy::Skip);
    let report = split_length(&s.input, &s.out, &prefs).unwrap();

    assert_eq!(report.skipped, vec![2, 3]);
    assert_eq!(listing(&s.out), vec!["1.txt", "2.txt"]);
    assert_eq!(read(&s.out, "2.txt"), "ab\ncd\n");
}

#[test]
fn only_blank_lines_with_skip_creates_no_files() {
    let s = scratch("\n\n");
    let prefs = SplitPrefs::new().with_invalid_lines(InvalidLinePolicy::Skip);
    let report = split_length(&s.input, &s.out, &prefs).unwrap();
    assert!(listing(&s.out).is_empty());
    assert_eq!(report.skipped.len(), 2);
}

#[test]
fn missing_input_is_not_found() {
    let s = scratch("");
    let absent = s.dir.path().join("absent.txt");
    let err = split_length(&absent, &s.out, &SplitPrefs::new()).unwrap_err();
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn invalid_utf8_is_an_io_error() {
    let s = scratch("");
    fs::write(&s.input, [b'o', b'k', b'\n', 0xff, b'\n']).unwrap();
    let err = split_length(&s.input, &s.out, &SplitPrefs::new()).unwrap_err();
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::InvalidData));
}
