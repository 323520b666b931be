use std::{fs, process::Command};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

struct Outcome {
    stdout: String,
    stderr: String,
    code:   Option<i32>,
}

fn reckon(args: &[&str]) -> Outcome {
    let output = Command::new(env!("CARGO_BIN_EXE_reckon")).args(args)
                                                           .env_remove("RUST_LOG")
                                                           .output()
                                                           .unwrap_or_else(|e| {
                                                               panic!("Failed to run reckon: {e}")
                                                           });

    Outcome { stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
              stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
              code:   output.status.code(), }
}

#[test]
fn prints_result() {
    let outcome = reckon(&["(2 + 3) * 4"]);
    assert_eq!(outcome.stdout, "20\n");
    assert_eq!(outcome.stderr, "");
    assert_eq!(outcome.code, Some(0));
}

#[test]
fn expressions_may_start_with_a_sign() {
    assert_eq!(reckon(&["-5+3"]).stdout, "-2\n");
    assert_eq!(reckon(&["--5"]).stdout, "5\n");
    assert_eq!(reckon(&["--ast", "-5+3"]).stdout, "((-5)+3)\n-2\n");
}

#[test]
fn errors_go_to_stderr_once_with_failure_status() {
    let outcome = reckon(&["1/0"]);
    assert_eq!(outcome.stdout, "");
    assert_eq!(outcome.stderr, "Error at position 1: Division by zero.\n");
    assert_eq!(outcome.code, Some(1));
}

#[test]
fn empty_expression_is_an_error_by_default() {
    let outcome = reckon(&[""]);
    assert_eq!(outcome.stderr, "Error: Empty input.\n");
    assert_eq!(outcome.code, Some(1));
}

#[test]
fn empty_as_zero_prints_zero_silently() {
    let outcome = reckon(&["-z", ""]);
    assert_eq!(outcome.stdout, "0\n");
    assert_eq!(outcome.stderr, "");
    assert_eq!(outcome.code, Some(0));
}

#[test]
fn tokens_and_tree_are_printed_before_the_result() {
    assert_eq!(reckon(&["--tokens", "1 + 2"]).stdout, "NUMBER:1 PLUS NUMBER:2\n3\n");
    assert_eq!(reckon(&["--ast", "10-2-3"]).stdout, "((10-2)-3)\n5\n");
    assert_eq!(reckon(&["--tokens", "--ast", "2*.5"]).stdout,
               "NUMBER:2 MULTIPLY NUMBER:0.5\n(2*0.5)\n1\n");
}

#[test]
fn file_mode_evaluates_each_non_blank_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sums.txt");
    fs::write(&path, "1 + 1\n\n   \n2 * 3\n-4 / 8\n").unwrap();

    let outcome = reckon(&["--file", path.to_str().unwrap()]);
    assert_eq!(outcome.stdout, "2\n6\n-0.5\n");
    assert_eq!(outcome.code, Some(0));
}

#[test]
fn file_mode_keeps_going_after_a_failing_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    fs::write(&path, "1 +\n7 * 6\n").unwrap();

    let outcome = reckon(&["-f", path.to_str().unwrap()]);
    assert_eq!(outcome.stdout, "42\n");
    assert_eq!(outcome.stderr, "Error at end of input: Invalid syntax.\n");
    assert_eq!(outcome.code, Some(1));
}

#[test]
fn missing_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let outcome = reckon(&["--file", path.to_str().unwrap()]);
    assert!(outcome.stderr.starts_with("Failed to read the input file"));
    assert_eq!(outcome.code, Some(1));
}
