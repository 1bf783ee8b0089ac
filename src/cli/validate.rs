//! Validate command.

use crate::cli::output;
use crate::cli::InputArgs;
use crate::core::validation::validate_inputs;
use crate::error::Result;

/// Validate inputs without side effects.
pub fn execute(inputs: InputArgs) -> Result<()> {
    let inputs = inputs.into_raw()?;
    let validated = validate_inputs(&inputs)?;

    for advisory in validated.advisories() {
        output::warn(&advisory.to_string());
    }
    output::success("inputs valid");

    Ok(())
}
