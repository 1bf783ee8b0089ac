//! Fake collaborators for library-level pipeline tests.

use std::cell::{Cell, RefCell};

use sshprep::core::config::SshConfig;
use sshprep::core::exec::CommandRunner;
use sshprep::core::ssh::SshSetup;
use sshprep::error::{ExecutionError, Result, SshError};

/// Records every command and optionally fails them.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<Vec<String>>>,
    pub fail: bool,
}

impl RecordingRunner {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::result::Result<String, ExecutionError> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);

        if self.fail {
            return Err(ExecutionError::Failed {
                command: format!("{} {}", program, args.join(" ")),
                stderr: "error: could not lock config file".into(),
                code: Some(255),
            });
        }
        Ok(String::new())
    }
}

/// Captures the SSH configuration it receives.
#[derive(Default)]
pub struct FakeSsh {
    pub received: RefCell<Option<SshConfig>>,
    pub calls: Cell<usize>,
    pub fail: bool,
}

impl FakeSsh {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl SshSetup for FakeSsh {
    fn setup(&self, config: &SshConfig) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        *self.received.borrow_mut() = Some(config.clone());

        if self.fail {
            return Err(SshError::Write {
                path: "/nonexistent/agent.sock".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "agent not running"),
            }
            .into());
        }
        Ok(())
    }
}
