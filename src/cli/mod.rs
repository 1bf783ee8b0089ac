//! Command-line interface.
//!
//! Every input flag also reads the matching GitHub Actions input variable
//! (`INPUT_<NAME>`), and the event context comes from `GITHUB_EVENT_PATH`
//! and `GITHUB_ACTOR`.

pub mod identity;
pub mod output;
pub mod setup;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use zeroize::Zeroizing;

use crate::core::context::CiContext;
use crate::core::inputs::RawInputs;
use crate::core::types::Advisory;
use crate::error::Result;

/// sshprep - Prepare SSH access and a git identity for CI jobs.
#[derive(Parser)]
#[command(
    name = "sshprep",
    about = "Prepare SSH access and a git identity for CI jobs",
    version
)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate inputs, hand off SSH settings and configure git
    Setup {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        context: ContextArgs,

        /// Write the SSH configuration as JSON to this path
        #[arg(long, env = "SSHPREP_SSH_CONFIG_OUT", value_name = "PATH")]
        ssh_config_out: Option<PathBuf>,

        /// Log git commands instead of running them
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate inputs without side effects
    Validate {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Show the git identity that setup would configure
    Identity {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        context: ContextArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Provisioning inputs.
#[derive(Args, Default)]
pub struct InputArgs {
    /// Connection name (max 255 chars)
    #[arg(long, env = "INPUT_NAME")]
    pub name: Option<String>,

    /// SSH port (1-65535)
    #[arg(long, env = "INPUT_PORT")]
    pub port: Option<String>,

    /// SSH user (max 32 chars)
    #[arg(long, env = "INPUT_USER")]
    pub user: Option<String>,

    /// Target host [default: github.com]
    #[arg(long, env = "INPUT_ORIGIN")]
    pub origin: Option<String>,

    /// SSH private or public key
    #[arg(long, env = "INPUT_SSHKEY", hide_env_values = true)]
    pub ssh_key: Option<Zeroizing<String>>,

    /// Read the SSH key from a file
    #[arg(long, value_name = "PATH", conflicts_with = "ssh_key")]
    pub ssh_key_file: Option<PathBuf>,

    /// Git user name (GitHub handle)
    #[arg(long, env = "INPUT_GIT_USERNAME")]
    pub git_username: Option<String>,

    /// Git user email
    #[arg(long, env = "INPUT_GIT_EMAIL")]
    pub git_email: Option<String>,
}

impl InputArgs {
    /// Capture the raw input set.
    ///
    /// # Errors
    ///
    /// Returns an IO error if `--ssh-key-file` cannot be read.
    pub fn into_raw(self) -> Result<RawInputs> {
        let ssh_key = match self.ssh_key_file {
            Some(path) => Some(Zeroizing::new(std::fs::read_to_string(path)?)),
            None => self.ssh_key,
        };
        // Moves the buffer into RawInputs, which zeroizes it on drop
        let ssh_key = ssh_key.map(|mut key| std::mem::take(&mut *key));

        Ok(RawInputs::normalized(
            self.name,
            self.port,
            self.user,
            self.origin,
            ssh_key,
            self.git_username,
            self.git_email,
        ))
    }
}

/// CI event context.
#[derive(Args, Debug, Default)]
pub struct ContextArgs {
    /// Path to the event payload JSON
    #[arg(long, env = "GITHUB_EVENT_PATH", value_name = "PATH")]
    pub event_path: Option<PathBuf>,

    /// Handle of the user that triggered the run
    #[arg(long, env = "GITHUB_ACTOR")]
    pub actor: Option<String>,
}

impl ContextArgs {
    /// Load the CI context. An unusable payload yields an advisory.
    pub fn load(&self) -> (CiContext, Option<Advisory>) {
        let path = self
            .event_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty());
        CiContext::load_or_actor(path, self.actor.as_deref())
    }
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    match command {
        Command::Setup {
            inputs,
            context,
            ssh_config_out,
            dry_run,
        } => setup::execute(inputs, &context, ssh_config_out, dry_run),
        Command::Validate { inputs } => validate::execute(inputs),
        Command::Identity {
            inputs,
            context,
            json,
        } => identity::execute(inputs, &context, json),
    }
}
