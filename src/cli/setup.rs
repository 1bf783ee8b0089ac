//! Setup command.
//!
//! Runs the full pipeline with the host's git and the JSON SSH handoff.

use std::path::PathBuf;

use crate::cli::output;
use crate::cli::{ContextArgs, InputArgs};
use crate::core::exec::{CommandRunner, DryRunRunner, SystemRunner};
use crate::core::git::GitOutcome;
use crate::core::provision::provision;
use crate::core::ssh::Handoff;
use crate::error::Result;

/// Validate inputs, hand off SSH settings and configure git.
pub fn execute(
    inputs: InputArgs,
    context: &ContextArgs,
    ssh_config_out: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let inputs = inputs.into_raw()?;
    let (ctx, ctx_advisory) = context.load();

    let runner: &dyn CommandRunner = if dry_run { &DryRunRunner } else { &SystemRunner };
    let handoff = Handoff::new(ssh_config_out.clone());

    let report = provision(&inputs, &ctx, &handoff, runner)?;

    for advisory in ctx_advisory.iter().chain(&report.advisories) {
        output::warn(&advisory.to_string());
    }

    output::success("ssh configured");
    output::kv("origin:", report.ssh.origin());
    if let Some(port) = report.ssh.port() {
        output::kv("port:  ", port);
    }
    if let Some(user) = report.ssh.user() {
        output::kv("user:  ", user);
    }
    output::kv("key:   ", format!("sha256:{}", report.ssh.key_fingerprint()));
    if let Some(path) = &ssh_config_out {
        output::kv("written:", path.display());
    }

    let identity = format!("{} <{}>", report.resolution.name(), report.resolution.email());
    match &report.git {
        GitOutcome::Configured => {
            let suffix = if dry_run { " (dry run)" } else { "" };
            output::success(&format!("git identity{}: {}", suffix, identity));
        }
        GitOutcome::Failed(reason) => {
            output::warn(&format!("git configuration failed: {}", reason));
        }
    }

    output::success("setup completed");
    Ok(())
}
