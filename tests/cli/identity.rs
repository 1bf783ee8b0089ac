//! Tests for `sshprep identity`.

use crate::support::*;

fn parse(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_str(&stdout(output)).expect("identity output is JSON")
}

#[test]
fn test_identity_mixes_event_sources() {
    let t = Test::new();
    let event = t.write_event(PUSH_EVENT_MIXED);

    let output = t.identity_json(ED25519_KEY, &["--event-path", event.to_str().unwrap()]);
    assert_success(&output);

    let view = parse(&output);
    assert_eq!(view["user_name"], "alice");
    assert_eq!(view["name_source"], "pusher");
    assert_eq!(view["user_email"], "alice.author@example.com");
    assert_eq!(view["email_source"], "head_commit_author");
}

#[test]
fn test_identity_actor_fallback() {
    let t = Test::new();
    let event = t.write_event(PULL_REQUEST_EVENT);

    let output = t
        .cmd()
        .args(["identity", "--json", "--event-path"])
        .arg(&event)
        .env("INPUT_SSHKEY", ED25519_KEY)
        .env("GITHUB_ACTOR", "bob")
        .output()
        .unwrap();
    assert_success(&output);

    let view = parse(&output);
    assert_eq!(view["user_name"], "bob");
    assert_eq!(view["user_email"], "bob@users.noreply.github.com");
    assert_eq!(view["email_source"], "actor");
}

#[test]
fn test_identity_literal_fallback() {
    let t = Test::new();

    let output = t.identity_json(ED25519_KEY, &[]);
    assert_success(&output);

    let view = parse(&output);
    assert_eq!(view["user_name"], "GitHub Action");
    assert_eq!(view["user_email"], "action@github.com");
    assert_eq!(view["name_source"], "fallback");
}

#[test]
fn test_identity_requested_values() {
    let t = Test::new();

    let output = t.identity_json(
        ED25519_KEY,
        &["--git-username", "octocat", "--git-email", "octo@example.com", "--actor", "bob"],
    );
    assert_success(&output);

    let view = parse(&output);
    assert_eq!(view["user_name"], "octocat");
    assert_eq!(view["user_email"], "octo@example.com");
    assert_eq!(view["name_source"], "requested");
}

#[test]
fn test_identity_text_output() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["identity", "--actor", "bob"])
        .env("INPUT_SSHKEY", ED25519_KEY)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Git identity");
    assert_stdout_contains(&output, "bob@users.noreply.github.com");
}

#[test]
fn test_identity_malformed_event_uses_actor() {
    let t = Test::new();
    let event = t.write_event("{ not json");

    let output = t.identity_json(
        ED25519_KEY,
        &["--event-path", event.to_str().unwrap(), "--actor", "bob"],
    );
    assert_success(&output);

    let view = parse(&output);
    assert_eq!(view["user_name"], "bob");
    assert_eq!(view["name_source"], "actor");
}

#[test]
fn test_identity_missing_event_file_uses_actor() {
    let t = Test::new();
    let missing = t.dir.path().join("nope.json");

    let output = t
        .cmd()
        .args(["identity", "--actor", "bob", "--event-path"])
        .arg(&missing)
        .env("INPUT_SSHKEY", ED25519_KEY)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "event context unavailable");
    assert_stdout_contains(&output, "bob@users.noreply.github.com");
}
