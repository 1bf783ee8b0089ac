//! Raw provisioning inputs.
//!
//! Values arrive as optional strings from the CI parameter store. Empty
//! strings are treated as absent, matching how CI runners export unset
//! inputs.

use std::fmt;

use zeroize::Zeroizing;

use crate::core::constants::DEFAULT_ORIGIN;

/// The raw input set for one run. Immutable once captured.
#[derive(Clone, Default)]
pub struct RawInputs {
    pub name: Option<String>,
    pub port: Option<String>,
    pub user: Option<String>,
    pub origin: Option<String>,
    pub ssh_key: Option<Zeroizing<String>>,
    pub git_username: Option<String>,
    pub git_email: Option<String>,
}

impl RawInputs {
    /// Capture inputs, dropping empty values and defaulting the origin.
    #[allow(clippy::too_many_arguments)]
    pub fn normalized(
        name: Option<String>,
        port: Option<String>,
        user: Option<String>,
        origin: Option<String>,
        ssh_key: Option<String>,
        git_username: Option<String>,
        git_email: Option<String>,
    ) -> Self {
        Self {
            name: non_empty(name),
            port: non_empty(port),
            user: non_empty(user),
            origin: Some(non_empty(origin).unwrap_or_else(|| DEFAULT_ORIGIN.to_string())),
            ssh_key: non_empty(ssh_key).map(Zeroizing::new),
            git_username: non_empty(git_username),
            git_email: non_empty(git_email),
        }
    }

    /// The SSH key, if supplied.
    pub fn ssh_key(&self) -> Option<&str> {
        self.ssh_key.as_ref().map(|k| k.as_str())
    }
}

impl fmt::Debug for RawInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawInputs")
            .field("name", &self.name)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("origin", &self.origin)
            .field("ssh_key", &self.ssh_key.as_ref().map(|_| "<redacted>"))
            .field("git_username", &self.git_username)
            .field("git_email", &self.git_email)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
