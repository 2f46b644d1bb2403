#![allow(unused)]
//! Headless mode process-level integration harness.
//!
//! # What this covers
//!
//! This harness exercises `munpul` as a compiled binary via
//! [`std::process::Command`]. It validates the contract of headless mode from
//! the outside — what a user or another CLI tool would observe.
//!
//! - **Flags**: `--headless`, `--query`, `--format plain|json`.
//! - **Exit codes**: clean run = 0, matches or not; unknown flags = non-zero.
//! - **Output formats**: plain lines carry title and description; jsonl
//!   output parses back into the expected objects.
//!
//! # What this does NOT cover
//!
//! - TUI rendering (that requires a real terminal)
//!
//! # Running
//!
//! ```sh
//! cargo test --test headless_harness
//! ```

use std::process::{Command, Output};

fn munpul(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_munpul"))
        .args(args)
        .output()
        .expect("run munpul binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout is UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[test]
fn match_exits_zero() {
    let output = munpul(&["--headless", "--query", "코딩"]);
    assert!(output.status.success(), "{output:?}");
}

#[test]
fn no_match_still_exits_zero() {
    let output = munpul(&["--headless", "--query", "zzz"]);
    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_flag_exits_nonzero() {
    let output = munpul(&["--headless", "--no-such-flag"]);
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// Plain output
// ---------------------------------------------------------------------------

#[test]
fn plain_output_carries_title_and_description() {
    let output = munpul(&["--headless", "--query", "코딩"]);
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("코딩"), "{}", lines[0]);
    assert!(lines[0].contains("프론트엔드부터"), "{}", lines[0]);
}

#[test]
fn empty_query_prints_the_whole_catalog() {
    let output = munpul(&["--headless"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 5);
}

#[test]
fn description_query_prints_each_match_once() {
    let output = munpul(&["--headless", "--query", "학습"]);
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("한국사"));
    assert!(lines[1].starts_with("수학"));
    assert!(lines[2].starts_with("코딩"));
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn json_output_is_one_object_per_line() {
    let output = munpul(&["--headless", "--query", "학습", "--format", "json"]);
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3);

    let titles: Vec<String> = lines
        .iter()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).expect("valid jsonl");
            value["title"].as_str().expect("title is a string").to_string()
        })
        .collect();
    assert_eq!(titles, ["한국사", "수학", "코딩"]);
}

#[test]
fn json_no_match_emits_nothing() {
    let output = munpul(&["--headless", "--query", "zzz", "--format", "json"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
