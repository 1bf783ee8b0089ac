//! Command execution.
//!
//! Commands are always run as a program plus an argument list, never as an
//! interpolated shell string.
//!
//! ## Adding a New Runner
//!
//! Implement [`CommandRunner`] and pass it to
//! [`crate::core::provision::provision`]. Tests use a recording runner.

use std::process::Command;

use tracing::{debug, info, warn};

use crate::error::ExecutionError;

/// Synchronous command execution.
pub trait CommandRunner {
    /// Run `program` with `args` and return its standard output.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError` if the program cannot be started or exits
    /// with a non-zero status.
    fn run(&self, program: &str, args: &[&str]) -> Result<String, ExecutionError>;
}

/// Render a command line for logs and error messages.
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .map(|part| {
            if part.is_empty() || part.contains(char::is_whitespace) || part.contains('"') {
                format!("{:?}", part)
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs commands on the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, ExecutionError> {
        let command = display_command(program, args);

        let binary = which::which(program)
            .map_err(|_| ExecutionError::BinaryNotFound(program.to_string()))?;

        info!("executing: {}", command);
        let output = Command::new(binary)
            .args(args)
            .output()
            .map_err(|e| ExecutionError::Spawn {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(%command, code = ?output.status.code(), %stderr, "command failed");
            return Err(ExecutionError::Failed {
                command,
                stderr,
                code: output.status.code(),
            });
        }

        debug!(%command, "command completed");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Logs commands instead of running them.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, ExecutionError> {
        info!("dry run: {}", display_command(program, args));
        Ok(String::new())
    }
}
