use std::process::Command;

use auth_check::{AuthOutcome, authenticate_user, verify};

#[test]
fn test_valid_credentials() {
    assert!(authenticate_user("admin", "12345"));
    assert_eq!(verify("admin", "12345").exit_code(), 0);
}

#[test]
fn test_invalid_credentials() {
    let cases = [
        ("", ""),
        ("admin", ""),
        ("", "12345"),
        ("Admin", "12345"),
        ("admin1", "12345"),
        ("admin", "123"),
        ("admin", "12345 "),
        ("user", "pass"),
        ("admin\u{7}", "12345"),
    ];

    for (username, password) in cases {
        let outcome = verify(username, password);
        assert_eq!(
            outcome,
            AuthOutcome::Failure,
            "{:?}/{:?} should be rejected",
            username,
            password
        );
        assert_eq!(outcome.exit_code(), 1);
    }
}

#[test]
fn test_driver_reports_success() {
    let output = Command::new(env!("CARGO_BIN_EXE_auth-check"))
        .output()
        .expect("failed to run driver");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Autenticacion exitosa\n"
    );
}

fn run_driver_with_settings(file_name: &str, contents: &str) -> std::process::Output {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(file_name), contents).unwrap();

    Command::new(env!("CARGO_BIN_EXE_auth-check"))
        .current_dir(dir.path())
        .output()
        .expect("failed to run driver")
}

fn assert_success_on_stdout(output: &std::process::Output) {
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Autenticacion exitosa\n"
    );
}

#[test]
fn test_driver_ignores_malformed_settings() {
    for contents in ["log_level = [1, 2]\n", "log_level = \"debug\n[broken"] {
        let output = run_driver_with_settings("auth_check.toml", contents);
        assert_success_on_stdout(&output);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Falling back to default settings"),
            "stderr: {}",
            stderr
        );
    }
}

#[test]
fn test_driver_ignores_unknown_log_level() {
    let output = run_driver_with_settings("auth_check.toml", "log_level = \"loud\"\n");
    assert_success_on_stdout(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Falling back to default settings"));
    assert!(stderr.contains("unknown log_level"));
}

#[test]
fn test_driver_trace_logs_stay_on_stderr() {
    let output = run_driver_with_settings("auth_check.toml", "log_level = \"trace\"\n");
    assert_success_on_stdout(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Checking credentials for user"));
    assert!(stderr.contains("Authentication for user"));
}

#[test]
fn test_driver_reads_only_toml_settings() {
    let output = run_driver_with_settings("auth_check.json", "{\"log_level\": \"loud\"}");
    assert_success_on_stdout(&output);
    assert!(output.stderr.is_empty());
}
