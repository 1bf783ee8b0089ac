//! CI execution context.
//!
//! A read-only snapshot of the event that triggered the run. Only the
//! parts used for identity resolution are kept.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::types::Advisory;
use crate::error::ContextError;

/// Name and email attached to an event participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Person {
    pub fn new(name: Option<&str>, email: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }
}

/// The triggering event, as seen by identity resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiContext {
    pub pusher: Option<Person>,
    pub head_commit_author: Option<Person>,
    /// Handle of the authenticated actor. Empty when unknown.
    pub actor: String,
}

#[derive(Deserialize)]
struct EventPayload {
    #[serde(default)]
    pusher: Option<Person>,
    #[serde(default)]
    head_commit: Option<HeadCommit>,
}

#[derive(Deserialize)]
struct HeadCommit {
    #[serde(default)]
    author: Option<Person>,
}

impl CiContext {
    /// Context with only an actor handle.
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            ..Default::default()
        }
    }

    /// Build a context from an event payload document.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Parse` if the payload is not valid JSON.
    pub fn from_event_json(json: &str, actor: impl Into<String>) -> Result<Self, ContextError> {
        let payload: EventPayload = serde_json::from_str(json)?;
        let ctx = Self {
            pusher: payload.pusher,
            head_commit_author: payload.head_commit.and_then(|c| c.author),
            actor: actor.into(),
        };

        debug!(
            pusher = ctx.pusher.is_some(),
            head_commit_author = ctx.head_commit_author.is_some(),
            actor = %ctx.actor,
            "event context loaded"
        );
        Ok(ctx)
    }

    /// Load the context from an event payload file, if one is given.
    ///
    /// # Errors
    ///
    /// Returns `ContextError` if the file cannot be read or parsed.
    pub fn load(event_path: Option<&Path>, actor: Option<&str>) -> Result<Self, ContextError> {
        let actor = actor.unwrap_or_default();
        let Some(path) = event_path else {
            debug!("no event payload, using actor only");
            return Ok(Self::with_actor(actor));
        };

        let json = std::fs::read_to_string(path).map_err(|source| ContextError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_event_json(&json, actor)
    }

    /// Load the context, falling back to the actor alone.
    ///
    /// The event payload only feeds identity resolution, so an unreadable
    /// or malformed payload is reported as an advisory instead of failing.
    pub fn load_or_actor(
        event_path: Option<&Path>,
        actor: Option<&str>,
    ) -> (Self, Option<Advisory>) {
        match Self::load(event_path, actor) {
            Ok(ctx) => (ctx, None),
            Err(e) => {
                warn!(error = %e, "event context unavailable, using the actor only");
                let ctx = Self::with_actor(actor.unwrap_or_default());
                (ctx, Some(Advisory::EventUnavailable(e.to_string())))
            }
        }
    }
}
