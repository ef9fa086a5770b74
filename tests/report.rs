use std::process::Command;
use std::process::Output;

use crm_security_report::crm_security_report;
use pretty_assertions::assert_eq;

fn report_command() -> Command {
    let mut command = test_bin::get_test_bin("crm-security-report");
    // Start from a known environment; tests that care about these set them explicitly.
    command.env_remove("RUST_BACKTRACE").env_remove("RUST_LOG");
    command
}

fn run_report() -> Output {
    report_command()
        .output()
        .expect("crm-security-report starts")
}

/// Test that the report is written to stdout, and nothing else is written anywhere.
#[test]
fn prints_report() {
    let output = run_report();
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        crm_security_report().to_string()
    );
    assert_eq!(String::from_utf8(output.stderr).unwrap(), "");
}

/// Test the first lines and the line count of the report.
#[test]
fn report_shape() {
    let output = run_report();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 57);
    assert_eq!(lines[0], "=== CRM SECURITY FEATURES DEMONSTRATION ===");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "1. AUTHENTICATION PROTECTION:");
    assert_eq!(lines[3], "✓ All API endpoints require authentication");
    assert!(stdout.ends_with("protecting the CRM application!\n"));
}

/// Test that two runs write exactly the same bytes.
#[test]
fn runs_are_identical() {
    let first = run_report();
    let second = run_report();
    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

/// Test that `$RUST_BACKTRACE` values the standard library accepts don't stop the report.
#[test]
fn any_rust_backtrace_prints_report() {
    for value in ["true", "2", "yes", "short", "full", "0", ""] {
        let output = report_command()
            .env("RUST_BACKTRACE", value)
            .output()
            .expect("crm-security-report starts");
        assert!(output.status.success(), "RUST_BACKTRACE={value:?}: {output:?}");
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            crm_security_report().to_string(),
            "RUST_BACKTRACE={value:?}"
        );
    }
}

/// Test that the logging and backtrace environment variables leave the output unchanged.
#[test]
fn environment_does_not_change_output() {
    let output = report_command()
        .env("RUST_LOG", "trace")
        .env("RUST_BACKTRACE", "full")
        .output()
        .expect("crm-security-report starts");
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        crm_security_report().to_string()
    );
    assert_eq!(String::from_utf8(output.stderr).unwrap(), "");
}

/// Test that debug logs go to stderr and leave stdout alone.
#[test]
fn logs_go_to_stderr() {
    let output = report_command()
        .args(["--tracing-filter", "crm_security_report=debug"])
        .output()
        .expect("crm-security-report starts");
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        crm_security_report().to_string()
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Wrote report"), "{stderr}");
}

/// Test that an invalid tracing filter is rejected before anything is printed.
#[test]
fn invalid_tracing_filter() {
    let output = report_command()
        .args(["--tracing-filter", "crm_security_report=loud"])
        .output()
        .expect("crm-security-report starts");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid value"), "{stderr}");
}

/// Test that a failing stdout is reported as an error instead of a success.
///
/// Writes to `/dev/full` fail with `ENOSPC`, but only once the write is flushed.
#[cfg(target_os = "linux")]
#[test]
fn full_stdout_fails() {
    let dev_full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("/dev/full opens");
    let output = report_command()
        .stdout(dev_full)
        .output()
        .expect("crm-security-report starts");
    assert!(!output.status.success(), "{output:?}");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("Failed to print the security report"),
        "{stderr}"
    );
}
