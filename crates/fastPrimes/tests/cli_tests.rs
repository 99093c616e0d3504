//! End-to-end tests for the `fastprimes` binary.

use std::process::{Command, Stdio};

fn fastprimes(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fastprimes"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to launch fastprimes")
}

/// Test the full comparison output for a small limit.
#[test]
fn test_limit_80_output() {
    let out = fastprimes(&["80"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Sequential filter | Total prime numbers : 22 | Time Taken : "));
    assert_eq!(lines[1], "2 3 5 7 11 13 17 19 23 29 31 37 41 43 47 53 59 61 67 71");
    assert!(lines[2].starts_with("Parallel filter   | Total prime numbers : 22 | Time Taken : "));
    assert_eq!(
        lines[3],
        "2 3 5 7 11 13 17 19 23 29 31 37 41 43 47 53 59 61 67 71 73 79"
    );
    assert_eq!(lines[4], "Press Enter to exit.");
}

/// Test a degenerate limit.
#[test]
fn test_limit_1_output() {
    let out = fastprimes(&["1"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Sequential filter | Total prime numbers : 0 |"));
    assert!(stdout.contains("Parallel filter   | Total prime numbers : 0 |"));
}

/// Test a negative limit is accepted and treated as empty.
#[test]
fn test_negative_limit() {
    let out = fastprimes(&["-5"]);
    assert!(out.status.success());
}

/// Test non-integer input fails before any computation.
#[test]
fn test_invalid_limit() {
    let out = fastprimes(&["abc"]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty(), "nothing is computed or printed");
    assert!(!out.stderr.is_empty());
}

/// Test an out-of-range limit fails.
#[test]
fn test_overflowing_limit() {
    let out = fastprimes(&["9223372036854775807"]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Limit overflow"));
}

/// Test a limit whose range cannot be allocated exits with an error, not a panic.
#[test]
fn test_unallocatable_limit() {
    let out = fastprimes(&["9223372036854775806"]);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr.contains("Capacity overflow"));
    assert!(!stderr.contains("panicked"));
    assert!(out.stdout.is_empty());
}
