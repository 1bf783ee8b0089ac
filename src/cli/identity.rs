//! Identity command - preview the resolved git identity.

use serde::Serialize;

use crate::cli::output;
use crate::cli::{ContextArgs, InputArgs};
use crate::core::config::derive_configs;
use crate::core::identity::{resolve, Tier};
use crate::core::validation::validate_inputs;
use crate::error::Result;

#[derive(Serialize)]
struct IdentityView<'a> {
    user_name: &'a str,
    user_email: &'a str,
    name_source: Tier,
    email_source: Tier,
}

/// Show the git identity that setup would configure.
pub fn execute(inputs: InputArgs, context: &ContextArgs, json: bool) -> Result<()> {
    let inputs = inputs.into_raw()?;
    let validated = validate_inputs(&inputs)?;
    let (ctx, ctx_advisory) = context.load();

    let (_, requested) = derive_configs(&validated);
    let resolution = resolve(&requested, &ctx);

    if json {
        let view = IdentityView {
            user_name: resolution.name(),
            user_email: resolution.email(),
            name_source: resolution.name_tier,
            email_source: resolution.email_tier,
        };
        let out = serde_json::to_string_pretty(&view).map_err(std::io::Error::other)?;
        output::data(&out);
        return Ok(());
    }

    for advisory in ctx_advisory.iter().chain(&resolution.advisories) {
        output::warn(&advisory.to_string());
    }
    output::header("Git identity");
    output::kv("name: ", format!("{} ({:?})", resolution.name(), resolution.name_tier));
    output::kv("email:", format!("{} ({:?})", resolution.email(), resolution.email_tier));

    Ok(())
}
