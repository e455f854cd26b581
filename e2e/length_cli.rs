// e2e/length_cli.rs: `length_splitter` as a black-box binary.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Locate the `length_splitter` binary produced by Cargo.
fn length_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_length_splitter") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("length_splitter");
    p
}

fn setup(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("words.txt");
    let out = dir.path().join("length");
    fs::write(&input, content).unwrap();
    fs::create_dir(&out).unwrap();
    (dir, input, out)
}

fn names(dir: &std::path::Path) -> Vec<String> {
    let mut v: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    v.sort();
    v
}

#[test]
fn test_length_example_scenario() {
    let (_dir, input, out) = setup("a\nbb\nccc\nd\n");
    let status = Command::new(length_bin())
        .args([&input, &out])
        .status()
        .expect("failed to run length_splitter");
    assert!(status.success());

    assert_eq!(names(&out), vec!["1.txt", "2.txt", "3.txt"]);
    assert_eq!(fs::read_to_string(out.join("1.txt")).unwrap(), "a\nd\n");
    assert_eq!(fs::read_to_string(out.join("2.txt")).unwrap(), "bb\n");
    assert_eq!(fs::read_to_string(out.join("3.txt")).unwrap(), "ccc\n");
}

#[test]
fn test_length_empty_input_creates_nothing() {
    let (_dir, input, out) = setup("");
    let status = Command::new(length_bin()).args([&input, &out]).status().unwrap();
    assert!(status.success());
    assert!(names(&out).is_empty());
}

#[test]
fn test_length_blank_line_fails_with_line_number() {
    let (_dir, input, out) = setup("ab\n\ncd\n");
    let output = Command::new(length_bin()).args([&input, &out]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("words.txt:2:"), "stderr: {stderr}");
    assert!(names(&out).is_empty(), "no output before the blank line is reported");
}

#[test]
fn test_length_skip_invalid_drops_blank_lines() {
    let (_dir, input, out) = setup("ab\n\ncd\n");
    let output = Command::new(length_bin())
        .arg("--skip-invalid")
        .args([&input, &out])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("skipped 1"));
    assert_eq!(fs::read_to_string(out.join("2.txt")).unwrap(), "ab\ncd\n");
}

#[test]
fn test_length_version() {
    let output = Command::new(length_bin()).arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "stdout: {stdout}");
}
