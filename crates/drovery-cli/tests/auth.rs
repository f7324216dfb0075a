//! CLI integration tests against the simulated backend.
//!
//! Each test gets its own HOME/XDG_DATA_HOME so session files never leak
//! between tests, and the mock delay is zeroed to keep the suite fast.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the CLI binary with an isolated home directory.
fn run_cli(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_drovery"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("DROVERY_AUTH_MODE", "mock");
    cmd.env("DROVERY_MOCK_DELAY_MS", "0");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
fn run_cli_success(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
fn run_cli_failure(args: &[&str], home: &Path) -> String {
    let output = run_cli(args, home);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn demo_login(home: &Path) -> String {
    run_cli_success(
        &[
            "auth",
            "login",
            "--email",
            "demo@drovery.com",
            "--password",
            "demo123",
        ],
        home,
    )
}

#[test]
fn login_with_demo_credentials_succeeds() {
    let home = TempDir::new().unwrap();

    let stdout = demo_login(home.path());
    assert!(stdout.contains("Logged in successfully"));
    assert!(stdout.contains("demo@drovery.com"));
    assert!(stdout.contains("mock-user-1"));
}

#[test]
fn login_with_wrong_password_fails() {
    let home = TempDir::new().unwrap();

    let stderr = run_cli_failure(
        &[
            "auth",
            "login",
            "--email",
            "demo@drovery.com",
            "--password",
            "wrong",
        ],
        home.path(),
    );
    assert!(stderr.contains("Invalid credentials. Use demo@drovery.com / demo123"));
}

#[test]
fn whoami_reports_the_active_session() {
    let home = TempDir::new().unwrap();
    demo_login(home.path());

    let stdout = run_cli_success(&["auth", "whoami"], home.path());
    assert!(stdout.contains("demo@drovery.com"));
    assert!(stdout.contains("mock"));
    assert!(stdout.contains("yes"));
}

#[test]
fn whoami_without_session_fails() {
    let home = TempDir::new().unwrap();

    let stderr = run_cli_failure(&["auth", "whoami"], home.path());
    assert!(stderr.contains("No active session"));
}

#[test]
fn token_prints_the_minted_access_token() {
    let home = TempDir::new().unwrap();
    demo_login(home.path());

    let stdout = run_cli_success(&["auth", "token"], home.path());
    assert!(stdout.trim().starts_with("mock_token_"));
}

#[test]
fn logout_discards_the_session_and_is_idempotent() {
    let home = TempDir::new().unwrap();
    demo_login(home.path());

    run_cli_success(&["auth", "logout"], home.path());
    run_cli_failure(&["auth", "whoami"], home.path());

    // Logging out again with no session is still a success.
    run_cli_success(&["auth", "logout"], home.path());
}

#[test]
fn relogin_replaces_the_stored_token() {
    let home = TempDir::new().unwrap();

    demo_login(home.path());
    let first = run_cli_success(&["auth", "token"], home.path());

    demo_login(home.path());
    let second = run_cli_success(&["auth", "token"], home.path());

    assert_ne!(first.trim(), second.trim());
}

#[test]
fn signup_succeeds_with_matching_passwords() {
    let home = TempDir::new().unwrap();

    let stdout = run_cli_success(
        &[
            "auth",
            "signup",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--password",
            "pw",
            "--confirm-password",
            "pw",
        ],
        home.path(),
    );
    assert!(stdout.contains("Account created successfully"));

    let token = run_cli_success(&["auth", "token"], home.path());
    assert!(token.trim().starts_with("mock_token_"));
}

#[test]
fn signup_with_mismatched_passwords_fails() {
    let home = TempDir::new().unwrap();

    let stderr = run_cli_failure(
        &[
            "auth",
            "signup",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--password",
            "pw",
            "--confirm-password",
            "other",
        ],
        home.path(),
    );
    assert!(stderr.contains("Passwords do not match"));

    // No session should have been written.
    run_cli_failure(&["auth", "whoami"], home.path());
}
