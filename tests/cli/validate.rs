//! Tests for `sshprep validate`.

use crate::support::*;

#[test]
fn test_validate_accepts_each_key_format() {
    let t = Test::new();

    for key in [
        ED25519_KEY,
        PEM_KEY,
        "ssh-rsa AAAAB3NzaC1yc2E",
        "ssh-dss AAAAB3NzaC1kc3M",
        "ecdsa-sha2-nistp256 AAAAE2VjZHNh",
    ] {
        let output = t.validate(key, &[]);
        assert_success(&output);
        assert_stdout_contains(&output, "inputs valid");
    }
}

#[test]
fn test_validate_rejects_unknown_key_format() {
    let t = Test::new();

    let output = t.validate("AAAAC3NzaC1lZDI1NTE5", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid SSH key format");
    assert_stderr_contains(&output, "check the SSHKEY input");
}

#[test]
fn test_validate_empty_key_env_is_missing() {
    let t = Test::new();

    let output = t.validate("", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "required");
}

#[test]
fn test_validate_unusual_origin_is_advisory() {
    let t = Test::new();

    let output = t.validate(ED25519_KEY, &["--origin=-weird_host"]);
    assert_success(&output);
    assert_stdout_contains(&output, "may not be a valid hostname");
    assert_stdout_contains(&output, "inputs valid");
}

#[test]
fn test_validate_field_errors() {
    let t = Test::new();

    let cases: &[(&[&str], &str)] = &[
        (&["--port", "abc"], "invalid port"),
        (&["--git-email", "a@b"], "invalid email format"),
        (&["--git-email", "a b@c.com"], "invalid email format"),
        (&["--git-username=-abc"], "invalid git username format"),
        (&["--git-username", "abc-"], "invalid git username format"),
    ];

    for (args, expected) in cases {
        let output = t.validate(ED25519_KEY, args);
        assert_failure(&output);
        assert_stderr_contains(&output, expected);
    }

    let long_name = "n".repeat(256);
    let output = t.validate(ED25519_KEY, &["--name", long_name.as_str()]);
    assert_failure(&output);
    assert_stderr_contains(&output, "NAME is too long");

    let long_user = "u".repeat(33);
    let output = t.validate(ED25519_KEY, &["--user", long_user.as_str()]);
    assert_failure(&output);
    assert_stderr_contains(&output, "USER is too long");
}

#[test]
fn test_validate_reports_key_before_port() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["validate", "--port", "99999"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "SSHKEY input is required");
}
