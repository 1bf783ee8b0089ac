//! Constants used throughout sshprep.
//!
//! Centralizes default values, fallbacks and input limits.

/// Origin used when none is supplied.
pub const DEFAULT_ORIGIN: &str = "github.com";

/// Last-resort git user name.
pub const FALLBACK_NAME: &str = "GitHub Action";

/// Last-resort git user email.
pub const FALLBACK_EMAIL: &str = "action@github.com";

/// Domain for synthesized `{actor}@...` addresses.
pub const NOREPLY_DOMAIN: &str = "users.noreply.github.com";

/// Maximum length of the NAME input.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length of the USER input.
pub const MAX_USER_LEN: usize = 32;

/// Maximum length of the GIT_EMAIL input.
pub const MAX_EMAIL_LEN: usize = 255;

/// Maximum length of a GitHub handle.
pub const MAX_GIT_USERNAME_LEN: usize = 39;

/// Prefixes accepted for OpenSSH public key lines.
pub const SSH_KEY_PREFIXES: &[&str] = &["ssh-rsa ", "ssh-ed25519 ", "ssh-dss ", "ecdsa-sha2-"];

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "SSHPREP_LOG";
