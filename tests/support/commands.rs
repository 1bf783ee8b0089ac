//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables a CI runner might leak into the test process.
const CI_VARS: &[&str] = &[
    "INPUT_NAME",
    "INPUT_PORT",
    "INPUT_USER",
    "INPUT_ORIGIN",
    "INPUT_SSHKEY",
    "INPUT_GIT_USERNAME",
    "INPUT_GIT_EMAIL",
    "GITHUB_EVENT_PATH",
    "GITHUB_ACTOR",
    "GITHUB_ACTIONS",
    "SSHPREP_LOG",
    "SSHPREP_SSH_CONFIG_OUT",
];

impl Test {
    /// Create an sshprep command with an isolated environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("sshprep").expect("failed to find sshprep binary");
        for var in CI_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("GIT_CONFIG_GLOBAL", self.gitconfig_path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `sshprep setup` with a key and extra arguments.
    pub fn setup(&self, key: &str, args: &[&str]) -> Output {
        self.cmd()
            .arg("setup")
            .env("INPUT_SSHKEY", key)
            .args(args)
            .output()
            .expect("failed to run sshprep setup")
    }

    /// Shortcut for `sshprep validate` with a key and extra arguments.
    pub fn validate(&self, key: &str, args: &[&str]) -> Output {
        self.cmd()
            .arg("validate")
            .env("INPUT_SSHKEY", key)
            .args(args)
            .output()
            .expect("failed to run sshprep validate")
    }

    /// Shortcut for `sshprep identity --json` with a key and extra arguments.
    pub fn identity_json(&self, key: &str, args: &[&str]) -> Output {
        self.cmd()
            .args(["identity", "--json"])
            .env("INPUT_SSHKEY", key)
            .args(args)
            .output()
            .expect("failed to run sshprep identity")
    }
}
