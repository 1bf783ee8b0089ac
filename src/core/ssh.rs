//! SSH setup.
//!
//! Agent setup, key installation and known-hosts handling belong to the
//! downstream SSH step. [`Handoff`] hands it the derived configuration.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::core::config::SshConfig;
use crate::error::{Result, SshError};

/// Consumes the derived SSH configuration. Failures are fatal to the run.
pub trait SshSetup {
    /// Prepare SSH access for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if setup fails; the run is aborted.
    fn setup(&self, config: &SshConfig) -> Result<()>;
}

#[derive(Serialize)]
struct HandoffDocument<'a> {
    name: Option<&'a str>,
    port: Option<u16>,
    user: Option<&'a str>,
    origin: &'a str,
    ssh_key: &'a str,
}

impl<'a> From<&'a SshConfig> for HandoffDocument<'a> {
    fn from(config: &'a SshConfig) -> Self {
        Self {
            name: config.name(),
            port: config.port(),
            user: config.user(),
            origin: config.origin(),
            ssh_key: config.ssh_key(),
        }
    }
}

/// Writes the SSH configuration as JSON for the next step.
///
/// Without a path only a summary is logged.
#[derive(Debug, Default, Clone)]
pub struct Handoff {
    path: Option<PathBuf>,
}

impl Handoff {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn write(&self, path: &std::path::Path, contents: &[u8]) -> std::io::Result<()> {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(path)?;

        // mode() only applies on creation
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }

        file.write_all(contents)?;
        file.flush()
    }
}

impl SshSetup for Handoff {
    fn setup(&self, config: &SshConfig) -> Result<()> {
        info!(
            origin = config.origin(),
            port = ?config.port(),
            user = ?config.user(),
            key = %config.key_fingerprint(),
            "ssh configuration ready"
        );

        let Some(path) = &self.path else {
            debug!("no handoff path, skipping write");
            return Ok(());
        };

        let doc =
            serde_json::to_vec_pretty(&HandoffDocument::from(config)).map_err(SshError::Encode)?;
        self.write(path, &doc).map_err(|source| SshError::Write {
            path: path.display().to_string(),
            source,
        })?;

        debug!(path = %path.display(), "ssh handoff written");
        Ok(())
    }
}
