//! Configuration derivation.
//!
//! Splits a validated input set into the SSH configuration and the
//! requested git identity. Identity defaults are left to
//! [`crate::core::identity`] so that CI-derived values win over literals.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::core::constants::DEFAULT_ORIGIN;
use crate::core::validation::ValidatedInputs;

/// SSH connection settings handed to the SSH setup step.
#[derive(Clone)]
pub struct SshConfig {
    name: Option<String>,
    port: Option<u16>,
    user: Option<String>,
    origin: String,
    ssh_key: Zeroizing<String>,
}

impl SshConfig {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Target host. Never empty.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The key material, exactly as supplied.
    pub fn ssh_key(&self) -> &str {
        &self.ssh_key
    }

    /// Short SHA-256 digest of the key, safe to log.
    pub fn key_fingerprint(&self) -> String {
        let digest = Sha256::digest(self.ssh_key.trim().as_bytes());
        digest[..8].iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Debug for SshConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fingerprint = format!("sha256:{}", self.key_fingerprint());
        f.debug_struct("SshConfig")
            .field("name", &self.name)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("origin", &self.origin)
            .field("ssh_key", &fingerprint)
            .finish()
    }
}

/// A git author identity.
///
/// Fields may be empty when requested; after resolution both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitIdentity {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

impl GitIdentity {
    pub fn new(user_name: impl Into<String>, user_email: impl Into<String>) -> Self {
        Self {
            user_name: Some(user_name.into()),
            user_email: Some(user_email.into()),
        }
    }
}

/// Derive the SSH configuration and the requested git identity.
pub fn derive_configs(validated: &ValidatedInputs) -> (SshConfig, GitIdentity) {
    let inputs = validated.inputs();

    let origin = inputs
        .origin
        .clone()
        .filter(|o| !o.is_empty())
        .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());

    let ssh = SshConfig {
        name: inputs.name.clone(),
        port: validated.port(),
        user: inputs.user.clone(),
        origin,
        ssh_key: inputs
            .ssh_key
            .clone()
            .unwrap_or_else(|| Zeroizing::new(String::new())),
    };

    let git = GitIdentity {
        user_name: inputs.git_username.clone(),
        user_email: inputs.git_email.clone(),
    };

    (ssh, git)
}
