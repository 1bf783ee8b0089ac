//! Shared domain types.

use std::fmt;

/// A non-fatal condition surfaced to the operator.
///
/// Advisories never change whether a run passes or fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// The origin does not look like a hostname or IPv4 address.
    UnusualOrigin(String),
    /// The event payload could not be used; only the actor is known.
    EventUnavailable(String),
    /// An identity field fell back past the CI event metadata.
    IdentityFallback {
        field: IdentityField,
        value: String,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnusualOrigin(origin) => write!(
                f,
                "origin \"{}\" may not be a valid hostname or IP address",
                origin
            ),
            Self::EventUnavailable(reason) => {
                write!(f, "event context unavailable ({}), using the actor only", reason)
            }
            Self::IdentityFallback { field, value } => write!(
                f,
                "could not determine git user {} from the event, using {}",
                field, value
            ),
        }
    }
}

/// One of the two git identity fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Name,
    Email,
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Email => f.write_str("email"),
        }
    }
}
