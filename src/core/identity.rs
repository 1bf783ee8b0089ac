//! Git identity resolution.
//!
//! Fills in missing identity fields from the CI event. Name and email are
//! resolved independently, so the two may come from different sources.
//!
//! ```text
//! name:  requested -> pusher -> head commit author -> actor          -> "GitHub Action"
//! email: requested -> pusher -> head commit author -> actor@noreply  -> "action@github.com"
//! ```

use serde::Serialize;
use tracing::{info, warn};

use crate::core::config::GitIdentity;
use crate::core::constants::{FALLBACK_EMAIL, FALLBACK_NAME, NOREPLY_DOMAIN};
use crate::core::context::{CiContext, Person};
use crate::core::types::{Advisory, IdentityField};

/// Where a resolved value came from, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Requested,
    Pusher,
    HeadCommitAuthor,
    Actor,
    Fallback,
}

impl Tier {
    /// Whether using this tier should be surfaced to the operator.
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Actor | Self::Fallback)
    }
}

/// A fully resolved identity and how each field was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub identity: GitIdentity,
    pub name_tier: Tier,
    pub email_tier: Tier,
    pub advisories: Vec<Advisory>,
}

impl Resolution {
    /// Resolved user name. Never empty.
    pub fn name(&self) -> &str {
        self.identity.user_name.as_deref().unwrap_or(FALLBACK_NAME)
    }

    /// Resolved user email. Never empty.
    pub fn email(&self) -> &str {
        self.identity.user_email.as_deref().unwrap_or(FALLBACK_EMAIL)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn person_field<'a>(
    person: Option<&'a Person>,
    pick: fn(&Person) -> Option<&str>,
) -> Option<&'a str> {
    present(person.and_then(pick))
}

fn resolve_name(requested: &GitIdentity, ctx: &CiContext) -> (String, Tier) {
    let pick: fn(&Person) -> Option<&str> = |p| p.name.as_deref();

    if let Some(v) = present(requested.user_name.as_deref()) {
        return (v.to_string(), Tier::Requested);
    }
    if let Some(v) = person_field(ctx.pusher.as_ref(), pick) {
        return (v.to_string(), Tier::Pusher);
    }
    if let Some(v) = person_field(ctx.head_commit_author.as_ref(), pick) {
        return (v.to_string(), Tier::HeadCommitAuthor);
    }
    if let Some(actor) = present(Some(ctx.actor.as_str())) {
        return (actor.to_string(), Tier::Actor);
    }
    (FALLBACK_NAME.to_string(), Tier::Fallback)
}

fn resolve_email(requested: &GitIdentity, ctx: &CiContext) -> (String, Tier) {
    let pick: fn(&Person) -> Option<&str> = |p| p.email.as_deref();

    if let Some(v) = present(requested.user_email.as_deref()) {
        return (v.to_string(), Tier::Requested);
    }
    if let Some(v) = person_field(ctx.pusher.as_ref(), pick) {
        return (v.to_string(), Tier::Pusher);
    }
    if let Some(v) = person_field(ctx.head_commit_author.as_ref(), pick) {
        return (v.to_string(), Tier::HeadCommitAuthor);
    }
    if let Some(actor) = present(Some(ctx.actor.as_str())) {
        return (format!("{}@{}", actor, NOREPLY_DOMAIN), Tier::Actor);
    }
    (FALLBACK_EMAIL.to_string(), Tier::Fallback)
}

/// Resolve a requested identity against the CI context.
///
/// Never fails: both fields end up non-empty. Each field that falls back
/// to the actor or to the built-in literal yields an advisory.
pub fn resolve(requested: &GitIdentity, ctx: &CiContext) -> Resolution {
    let (name, name_tier) = resolve_name(requested, ctx);
    let (email, email_tier) = resolve_email(requested, ctx);

    let mut advisories = Vec::new();
    for (field, value, tier) in [
        (IdentityField::Name, &name, name_tier),
        (IdentityField::Email, &email, email_tier),
    ] {
        if tier.is_fallback() {
            warn!(
                %field,
                value = %value,
                ?tier,
                "could not determine git user {} from the event",
                field
            );
            advisories.push(Advisory::IdentityFallback {
                field,
                value: value.clone(),
            });
        }
    }

    info!(name = %name, email = %email, "resolved git identity");

    Resolution {
        identity: GitIdentity::new(name, email),
        name_tier,
        email_tier,
        advisories,
    }
}
