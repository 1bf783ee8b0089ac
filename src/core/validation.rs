//! Input validation for provisioning runs.
//!
//! Each field kind has its own validator. Optional fields pass when
//! absent; only the SSH key is required. [`validate_inputs`] applies the
//! validators in a fixed order and stops at the first violation, so error
//! messages are deterministic.

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::{debug, warn};

use crate::core::constants::{
    MAX_EMAIL_LEN, MAX_GIT_USERNAME_LEN, MAX_NAME_LEN, MAX_USER_LEN, SSH_KEY_PREFIXES,
};
use crate::core::inputs::RawInputs;
use crate::core::types::Advisory;
use crate::error::ValidationError;

static PEM_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-----BEGIN [A-Z ]+-----").expect("valid regex")
});

static HOSTNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9._-]*[a-zA-Z0-9]$").expect("valid regex")
});

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$").expect("valid regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex")
});

// Alphanumeric runs joined by single hyphens; length is checked separately.
static GIT_USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex")
});

/// Inputs that passed [`validate_inputs`].
#[derive(Debug, Clone)]
pub struct ValidatedInputs {
    inputs: RawInputs,
    port: Option<u16>,
    advisories: Vec<Advisory>,
}

impl ValidatedInputs {
    /// The inputs, unchanged.
    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    /// The parsed port, if one was supplied.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Non-fatal conditions raised while validating.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }
}

/// Validate an SSH key.
///
/// The trimmed key must be a PEM block (`-----BEGIN <TYPE>-----`) or an
/// OpenSSH public key line. Key material itself is not inspected.
///
/// # Errors
///
/// Returns `SshKeyRequired` when the key is missing or blank, and
/// `InvalidSshKey` when it matches no known format.
pub fn validate_ssh_key(key: Option<&str>) -> Result<(), ValidationError> {
    let key = key.map(str::trim).unwrap_or_default();
    if key.is_empty() {
        return Err(ValidationError::SshKeyRequired);
    }

    let known = PEM_HEADER_RE.is_match(key)
        || SSH_KEY_PREFIXES.iter().any(|prefix| key.starts_with(prefix));
    if !known {
        return Err(ValidationError::InvalidSshKey);
    }

    Ok(())
}

/// Validate and parse a port.
///
/// Parsing is strict: the whole value must be a base-10 integer, so `22abc` is
/// rejected rather than read as 22.
///
/// # Errors
///
/// Returns `InvalidPort` unless the value is a base-10 integer in 1..=65535.
pub fn validate_port(port: Option<&str>) -> Result<Option<u16>, ValidationError> {
    let Some(raw) = port else {
        return Ok(None);
    };

    match raw.parse::<u32>() {
        Ok(n @ 1..=65535) => Ok(Some(n as u16)),
        _ => Err(ValidationError::InvalidPort(raw.to_string())),
    }
}

/// Check the origin shape.
///
/// A malformed origin is only an advisory: self-hosted servers and
/// unusual addresses are still handed to SSH setup as given.
pub fn check_origin(origin: Option<&str>) -> Option<Advisory> {
    let origin = origin.filter(|o| !o.is_empty())?;

    if HOSTNAME_RE.is_match(origin) || IPV4_RE.is_match(origin) {
        return None;
    }

    warn!(origin, "origin may not be a valid hostname or IP address");
    Some(Advisory::UnusualOrigin(origin.to_string()))
}

/// Validate a git email address.
///
/// # Errors
///
/// Returns `InvalidEmail` if the value is not `local@domain.tld` shaped,
/// or `TooLong` if it exceeds 255 characters.
pub fn validate_email(email: Option<&str>) -> Result<(), ValidationError> {
    let Some(email) = email else {
        return Ok(());
    };

    // regex-lite's \s only covers ASCII whitespace
    if !EMAIL_RE.is_match(email) || email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }

    check_len("GIT_EMAIL", Some(email), MAX_EMAIL_LEN)
}

/// Validate a GitHub-style handle.
///
/// # Errors
///
/// Returns `InvalidGitUsername` for anything other than 1-39 alphanumeric
/// characters with single, interior hyphens.
pub fn validate_git_username(username: Option<&str>) -> Result<(), ValidationError> {
    let Some(username) = username else {
        return Ok(());
    };

    if username.len() > MAX_GIT_USERNAME_LEN || !GIT_USERNAME_RE.is_match(username) {
        return Err(ValidationError::InvalidGitUsername(username.to_string()));
    }

    Ok(())
}

fn check_len(field: &'static str, value: Option<&str>, max: usize) -> Result<(), ValidationError> {
    let len = value.map(|v| v.chars().count()).unwrap_or(0);
    if len > max {
        return Err(ValidationError::TooLong { field, len, max });
    }
    Ok(())
}

/// Validate a raw input set.
///
/// Checks run in order: SSH key, port, origin (advisory), email, git
/// username, NAME length, USER length. The first violation is returned.
///
/// # Errors
///
/// Returns the first `ValidationError` encountered.
pub fn validate_inputs(inputs: &RawInputs) -> Result<ValidatedInputs, ValidationError> {
    debug!(?inputs, "validating inputs");

    validate_ssh_key(inputs.ssh_key())?;
    let port = validate_port(inputs.port.as_deref())?;
    let advisories: Vec<Advisory> = check_origin(inputs.origin.as_deref()).into_iter().collect();
    validate_email(inputs.git_email.as_deref())?;
    validate_git_username(inputs.git_username.as_deref())?;
    check_len("NAME", inputs.name.as_deref(), MAX_NAME_LEN)?;
    check_len("USER", inputs.user.as_deref(), MAX_USER_LEN)?;

    debug!(advisories = advisories.len(), "inputs valid");

    Ok(ValidatedInputs {
        inputs: inputs.clone(),
        port,
        advisories,
    })
}
