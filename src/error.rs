//! Error types.
//!
//! Each concern has its own error enum; [`Error`] unifies them for the
//! pipeline and the CLI.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Ssh(#[from] SshError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rejected input. Always fatal, raised before any side effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("SSHKEY input is required and cannot be empty")]
    SshKeyRequired,

    #[error("invalid SSH key format: provide a valid SSH private or public key")]
    InvalidSshKey,

    #[error("invalid port '{0}': must be a number between 1 and 65535")]
    InvalidPort(String),

    #[error("invalid email format: {0}")]
    InvalidEmail(String),

    #[error("invalid git username format: {0}")]
    InvalidGitUsername(String),

    #[error("{field} is too long: {len} characters (max {max})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

impl ValidationError {
    /// Name of the input the violation originated from.
    pub fn field(&self) -> &'static str {
        match self {
            Self::SshKeyRequired | Self::InvalidSshKey => "SSHKEY",
            Self::InvalidPort(_) => "PORT",
            Self::InvalidEmail(_) => "GIT_EMAIL",
            Self::InvalidGitUsername(_) => "GIT_USERNAME",
            Self::TooLong { field, .. } => *field,
        }
    }
}

/// Failures from running an external command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("{0} not found on PATH")]
    BinaryNotFound(String),

    #[error("command failed: {command}: {stderr}")]
    Failed {
        command: String,
        stderr: String,
        code: Option<i32>,
    },

    #[error("failed to spawn {command}: {reason}")]
    Spawn { command: String, reason: String },
}

/// Failures loading the CI event context.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("failed to read event payload {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed event payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures from the SSH setup step. Always fatal.
#[derive(Error, Debug)]
pub enum SshError {
    #[error("failed to write SSH handoff {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode SSH handoff: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
