// Partition, order-preservation, and idempotence over a larger word list.

use std::collections::BTreeMap;
use std::fs;

use wordsplit::split::{split_alpha, split_length};
use wordsplit::SplitPrefs;

use super::support::{listing, scratch};

/// Deterministic lowercase word list with repeats and varied lengths.
fn word_list() -> Vec<String> {
    let mut state: u32 = 0x2545_f491;
    let mut out = Vec::new();
    for _ in 0..500 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let len = 1 + (state % 12) as usize;
        let word: String = (0..len)
            .map(|i| (b'a' + ((state >> (i % 24)) % 26) as u8) as char)
            .collect();
        out.push(word);
    }
    out.push(out[0].clone());
    out
}

fn content(words: &[String]) -> String {
    words.iter().map(|w| format!("{w}\n")).collect()
}

/// Reads every output file as `name -> lines`.
fn outputs(dir: &std::path::Path) -> BTreeMap<String, Vec<String>> {
    listing(dir)
        .into_iter()
        .map(|name| {
            let text = fs::read_to_string(dir.join(&name)).unwrap();
            let lines = text.lines().map(str::to_owned).collect();
            (name, lines)
        })
        .collect()
}

/// `true` if `sub` appears in `all` in the same relative order.
fn is_subsequence(sub: &[String], all: &[String]) -> bool {
    let mut it = all.iter();
    sub.iter().all(|s| it.any(|a| a == s))
}

#[test]
fn alpha_partitions_input_in_order() {
    let words = word_list();
    let s = scratch(&content(&words));
    split_alpha(&s.input, &s.out, &SplitPrefs::new()).unwrap();

    let files = outputs(&s.out);
    assert_eq!(files.len(), 26);

    let mut total = 0;
    for (name, lines) in &files {
        let letter = name.chars().next().unwrap();
        assert!(lines.iter().all(|l| l.starts_with(letter)), "{name}");
        let expected: Vec<String> = words
            .iter()
            .filter(|w| w.starts_with(letter))
            .cloned()
            .collect();
        assert_eq!(lines, &expected, "{name}");
        assert!(is_subsequence(lines, &words));
        total += lines.len();
    }
    assert_eq!(total, words.len());
}

#[test]
fn length_partitions_input_in_order() {
    let words = word_list();
    let max = words.iter().map(|w| w.chars().count()).max().unwrap();
    let s = scratch(&content(&words));
    split_length(&s.input, &s.out, &SplitPrefs::new()).unwrap();

    let files = outputs(&s.out);
    assert_eq!(files.len(), max);

    let mut total = 0;
    for n in 1..=max {
        let lines = &files[&format!("{n}.txt")];
        let expected: Vec<String> = words
            .iter()
            .filter(|w| w.trim().chars().count() == n)
            .cloned()
            .collect();
        assert_eq!(lines, &expected, "{n}.txt");
        total += lines.len();
    }
    assert_eq!(total, words.len());
}

#[test]
fn alpha_is_idempotent() {
    let s = scratch(&content(&word_list()));
    split_alpha(&s.input, &s.out, &SplitPrefs::new()).unwrap();
    let first = outputs(&s.out);
    split_alpha(&s.input, &s.out, &SplitPrefs::new()).unwrap();
    assert_eq!(outputs(&s.out), first);
}

#[test]
fn length_is_idempotent() {
    let s = scratch(&content(&word_list()));
    split_length(&s.input, &s.out, &SplitPrefs::new()).unwrap();
    let first = outputs(&s.out);
    split_length(&s.input, &s.out, &SplitPrefs::new()).unwrap();
    assert_eq!(outputs(&s.out), first);
}
