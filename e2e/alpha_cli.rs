// e2e/alpha_cli.rs: `alpha_splitter` as a black-box binary.
//
// Covers the example scenario, the 26-file guarantee, idempotence across
// two runs, and the summary printed with -v.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Locate the `alpha_splitter` binary produced by Cargo.
fn alpha_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_alpha_splitter") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("alpha_splitter");
    p
}

fn setup(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("words.txt");
    let out = dir.path().join("alpha");
    fs::write(&input, content).unwrap();
    fs::create_dir(&out).unwrap();
    (dir, input, out)
}

fn snapshot(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<(String, Vec<u8>)> = fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (
                e.file_name().to_string_lossy().into_owned(),
                fs::read(e.path()).unwrap(),
            )
        })
        .collect();
    files.sort();
    files
}

#[test]
fn test_alpha_example_scenario() {
    let (_dir, input, out) = setup("apple\nbanana\navocado\ncherry\n");
    let status = Command::new(alpha_bin())
        .args([&input, &out])
        .status()
        .expect("failed to run alpha_splitter");
    assert!(status.success(), "alpha_splitter should exit 0");

    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "apple\navocado\n");
    assert_eq!(fs::read_to_string(out.join("b.txt")).unwrap(), "banana\n");
    assert_eq!(fs::read_to_string(out.join("c.txt")).unwrap(), "cherry\n");

    let files = snapshot(&out);
    assert_eq!(files.len(), 26);
    let empty = files.iter().filter(|(_, bytes)| bytes.is_empty()).count();
    assert_eq!(empty, 23);
}

#[test]
fn test_alpha_empty_input_creates_26_files() {
    let (_dir, input, out) = setup("");
    let status = Command::new(alpha_bin()).args([&input, &out]).status().unwrap();
    assert!(status.success());
    assert_eq!(snapshot(&out).len(), 26);
}

#[test]
fn test_alpha_is_idempotent() {
    let (_dir, input, out) = setup("kiwi\nkale\nlime\nmango\n");
    assert!(Command::new(alpha_bin()).args([&input, &out]).status().unwrap().success());
    let first = snapshot(&out);
    assert!(Command::new(alpha_bin()).args([&input, &out]).status().unwrap().success());
    assert_eq!(snapshot(&out), first);
}

#[test]
fn test_alpha_verbose_prints_summary_on_stderr() {
    let (_dir, input, out) = setup("apple\n");
    let output = Command::new(alpha_bin())
        .arg("-v")
        .args([&input, &out])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "nothing goes to stdout on success");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 lines read"), "stderr: {stderr}");
    assert!(stderr.contains("26 files"), "stderr: {stderr}");
}

#[test]
fn test_alpha_extra_arguments_are_ignored() {
    let (_dir, input, out) = setup("apple\n");
    let output = Command::new(alpha_bin())
        .args([input.as_os_str(), out.as_os_str(), std::ffi::OsStr::new("stray")])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("stray"));
    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "apple\n");
}

#[cfg(unix)]
#[test]
fn test_alpha_non_utf8_input_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let (dir, _input, out) = setup("");
    let input = dir.path().join(OsStr::from_bytes(b"w\xffords.txt"));
    fs::write(&input, "apple\n").unwrap();

    let output = Command::new(alpha_bin())
        .args([&input, &out])
        .output()
        .expect("failed to run alpha_splitter");
    assert!(
        output.status.success(),
        "status: {}, stderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "apple\n");
    assert_eq!(snapshot(&out).len(), 26);
}
