//! Git identity configuration.
//!
//! Failures here are recoverable: a run with a partially configured git
//! identity still succeeds, unlike SSH setup.

use tracing::{info, warn};

use crate::core::config::GitIdentity;
use crate::core::exec::CommandRunner;
use crate::error::ExecutionError;

/// Outcome of configuring the git identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitOutcome {
    Configured,
    /// Configuration failed; the reason was logged as a warning.
    Failed(String),
}

impl GitOutcome {
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured)
    }
}

/// Set `user.name` and `user.email` in the global git config.
///
/// Each key is only set when its value is non-empty.
///
/// # Errors
///
/// Returns the first `ExecutionError` from git.
pub fn apply_identity(
    runner: &dyn CommandRunner,
    identity: &GitIdentity,
) -> Result<(), ExecutionError> {
    for (key, value) in [
        ("user.name", identity.user_name.as_deref()),
        ("user.email", identity.user_email.as_deref()),
    ] {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            runner.run("git", &["config", "--global", key, value])?;
        }
    }
    Ok(())
}

/// Configure the git identity, downgrading any failure to a warning.
pub fn configure(runner: &dyn CommandRunner, identity: &GitIdentity) -> GitOutcome {
    match apply_identity(runner, identity) {
        Ok(()) => {
            info!("git configuration completed");
            GitOutcome::Configured
        }
        Err(e) => {
            warn!(error = %e, "git configuration failed");
            GitOutcome::Failed(e.to_string())
        }
    }
}
