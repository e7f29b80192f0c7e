//! validate_design tool: heuristic check of markup against the design system.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::validate::validate_design;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ValidateInput {
    /// HTML/CSS code to validate
    pub code: String,

    /// Include accessibility validation
    #[serde(default = "default_true")]
    pub check_accessibility: bool,
}

pub fn run_validate(input: ValidateInput) -> String {
    validate_design(&input.code, input.check_accessibility).to_string()
}
