//! Exit codes and diagnostics shared by both binaries.
//!
//! - fewer than two positionals → exit 127, syntax line on stdout, no files
//! - unreadable input / missing output directory → exit 1, path on stderr
//! - unclassifiable alpha line → exit 1, line named on stderr
//! - `-q -q` silences diagnostics without changing the exit code

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn bin(name: &str) -> PathBuf {
    let var = format!("CARGO_BIN_EXE_{name}");
    if let Ok(p) = std::env::var(var) {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push(name);
    p
}

const PROGRAMS: [(&str, &str); 2] = [
    ("alpha_splitter", "<out_alpha_dir>"),
    ("length_splitter", "<out_length_dir>"),
];

#[test]
fn test_no_arguments_exits_127_with_syntax_on_stdout() {
    for (program, placeholder) in PROGRAMS {
        let output = Command::new(bin(program)).output().unwrap();
        assert_eq!(output.status.code(), Some(127), "{program}");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(
            stdout.trim_end(),
            format!("Syntax: {program} <in.txt> {placeholder}")
        );
    }
}

#[test]
fn test_one_argument_exits_127_without_io() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "apple\n").unwrap();
    for (program, _) in PROGRAMS {
        let output = Command::new(bin(program))
            .arg(&input)
            .current_dir(dir.path())
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(127), "{program}");
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_missing_input_exits_1() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.txt");
    for (program, _) in PROGRAMS {
        let output = Command::new(bin(program))
            .args([&input, &dir.path().to_path_buf()])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1), "{program}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("absent.txt"), "{program}: {stderr}");
    }
}

#[test]
fn test_missing_output_dir_exits_1() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "apple\n").unwrap();
    let out = dir.path().join("no_such_dir");
    for (program, _) in PROGRAMS {
        let output = Command::new(bin(program)).args([&input, &out]).output().unwrap();
        assert_eq!(output.status.code(), Some(1), "{program}");
    }
    assert!(!out.exists());
}

#[test]
fn test_uppercase_word_exits_1_naming_line() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "apple\nBanana\n").unwrap();
    let output = Command::new(bin("alpha_splitter"))
        .args([&input, &dir.path().to_path_buf()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Banana"), "stderr: {stderr}");
    assert!(stderr.contains(":2:"), "stderr: {stderr}");
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.txt");
    let output = Command::new(bin("length_splitter"))
        .args(["-q", "-q"])
        .args([&input, &dir.path().to_path_buf()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
}
