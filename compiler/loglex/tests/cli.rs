// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests for the `loglex` binary.
//!
//! Each test runs the built executable with piped stdin and checks stdout,
//! stderr and the exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn loglex(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_loglex"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn loglex");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for loglex")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn text_output_from_stdin() {
    let output = loglex(&[], "[12:30:00] started\n100-200 ms\nplain\n");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "1: [ 12 : 30 : 00 ] started\n  [timestamp]\n\
         2: 100 - 200 ms\n  [timerange]\n\
         3: plain\n\
         4: \n"
    );
}

#[test]
fn dash_reads_stdin() {
    let output = loglex(&["-"], "a b");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1: a b\n");
}

#[test]
fn matched_only() {
    let output = loglex(&["--matched-only"], "noise\n[1:2:3] hit\nmore noise");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2: [ 1 : 2 : 3 ] hit\n  [timestamp]\n");
}

#[test]
fn debug_format() {
    let output = loglex(&["--format=debug"], "x 1");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1: <word>: x <number>: 1\n");
}

#[test]
fn json_format() {
    let output = loglex(&["--format=json"], "5-6");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "number": 1,
            "text": "5 - 6",
            "tokens": [
                {"kind": "number", "lit": "5"},
                {"kind": "punctuation", "lit": "-"},
                {"kind": "number", "lit": "6"},
            ],
            "matches": ["timerange"],
        })
    );
}

#[test]
fn illegal_input_fails_with_literal() {
    let output = loglex(&[], "fine\nring \u{7} bell\nnever printed\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "1: fine\n");
    assert!(
        stderr(&output).contains("illegal token \"\\u{7}\" on line 2"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn skip_illegal_keeps_going() {
    let output = loglex(&["--skip-illegal"], "ring \u{7} bell\nafter");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1: ring bell\n2: after\n");
}

#[test]
fn missing_file_fails() {
    let output = loglex(&["/nonexistent/loglex/missing.log"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot find file"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn reads_a_file() {
    let path = std::env::temp_dir().join(format!("loglex-cli-{}.log", std::process::id()));
    std::fs::write(&path, "[00:00:01] tick").unwrap();
    let output = loglex(&[path.to_str().unwrap()], "");
    std::fs::remove_file(&path).unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1: [ 00 : 00 : 01 ] tick\n  [timestamp]\n");
}

#[test]
fn bad_option_prints_usage() {
    let output = loglex(&["--format=yaml"], "");
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("unknown format 'yaml'"));
    assert!(err.contains("Usage: loglex"));
}

#[test]
fn help_prints_usage() {
    let output = loglex(&["--help"], "");
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Usage: loglex"));
}
