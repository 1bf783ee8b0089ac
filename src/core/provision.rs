//! The provisioning pipeline.
//!
//! validate -> derive -> SSH setup -> resolve identity -> git config
//!
//! Validation runs before any side effect. SSH setup failures abort the
//! run; git configuration failures are only reported in the [`Report`].

use tracing::{debug, info};

use crate::core::config::{derive_configs, SshConfig};
use crate::core::context::CiContext;
use crate::core::exec::CommandRunner;
use crate::core::git::{self, GitOutcome};
use crate::core::identity::{self, Resolution};
use crate::core::inputs::RawInputs;
use crate::core::ssh::SshSetup;
use crate::core::types::Advisory;
use crate::core::validation::validate_inputs;
use crate::error::Result;

/// What a completed run did.
#[derive(Debug)]
pub struct Report {
    pub ssh: SshConfig,
    pub resolution: Resolution,
    pub git: GitOutcome,
    pub advisories: Vec<Advisory>,
}

/// Run the full provisioning pipeline.
///
/// # Errors
///
/// Returns `ValidationError` for rejected inputs and any error raised by
/// SSH setup. Git configuration errors are never returned.
pub fn provision(
    inputs: &RawInputs,
    ctx: &CiContext,
    ssh: &dyn SshSetup,
    runner: &dyn CommandRunner,
) -> Result<Report> {
    info!("starting ssh setup");

    let validated = validate_inputs(inputs)?;
    let (ssh_config, requested) = derive_configs(&validated);
    debug!(?ssh_config, ?requested, "configuration derived");

    ssh.setup(&ssh_config)?;

    let resolution = identity::resolve(&requested, ctx);
    let git = git::configure(runner, &resolution.identity);

    let mut advisories = validated.advisories().to_vec();
    advisories.extend(resolution.advisories.iter().cloned());

    info!(git_configured = git.is_configured(), "ssh setup completed");

    Ok(Report {
        ssh: ssh_config,
        resolution,
        git,
        advisories,
    })
}
