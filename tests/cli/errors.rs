//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("setup") && out.contains("validate") && out.contains("identity"));
}

#[test]
fn test_setup_help_hides_key_value() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["setup", "--help"])
        .env("INPUT_SSHKEY", ED25519_KEY)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "INPUT_SSHKEY");
    assert_output_excludes(&output, KEY_BODY);
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "sshprep");
}

#[test]
fn test_key_and_key_file_conflict() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["validate", "--ssh-key", ED25519_KEY, "--ssh-key-file", "id_ed25519"])
        .output()
        .unwrap();
    assert_failure(&output);
}

#[test]
fn test_missing_key_file_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["validate", "--ssh-key-file", "does-not-exist"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "io error");
}
