//! End-to-end checks for the `machin` binary
//!
//! Spawns the built executable and verifies the observable contract:
//! one exact line on stdout, silence on stderr, exit code 0, and the
//! same bytes on every run.

use std::process::{Command, Output};

fn run_machin() -> Output {
    Command::new(env!("CARGO_BIN_EXE_machin"))
        .output()
        .expect("failed to spawn machin binary")
}

#[test]
fn test_prints_pi_line_and_exits_zero() {
    let out = run_machin();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Machin's PI: 3.1415926535897931\n"
    );
}

#[test]
fn test_stderr_is_silent() {
    let out = run_machin();
    assert!(out.stderr.is_empty(), "unexpected stderr: {:?}", out.stderr);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let first = run_machin();
    let second = run_machin();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn test_printed_value_round_trips_to_the_computed_double() {
    let out = run_machin();
    let text = String::from_utf8(out.stdout).expect("stdout is UTF-8");
    let value: f64 = text
        .trim_end()
        .strip_prefix("Machin's PI: ")
        .expect("line carries the expected prefix")
        .parse()
        .expect("value parses as f64");
    assert_eq!(value.to_bits(), machin::machin_pi().to_bits());
}
