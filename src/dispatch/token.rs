//! get_token_value tool: look up a token by CSS custom property name.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, DISPLAY_NAME};

/// Theme hint for token lookup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TokenTheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TokenInput {
    /// Name of the design token (e.g., 'vita-color-brand-primary')
    pub token_name: String,

    /// Theme hint. Lookup currently ignores it and returns the first match.
    #[serde(default)]
    pub theme: TokenTheme,
}

/// Execute the get_token_value tool against `catalog`.
pub fn run_token(catalog: &Catalog, input: TokenInput) -> String {
    let css_var = format!("--{}", input.token_name);
    match catalog.find_by_css_var(&css_var) {
        Some((_, record)) => format!(
            "Token: {}\nValue: {}\nDescription: {}",
            input.token_name, record.value, record.description
        ),
        None => format!("Token '{}' not found in {} design system", input.token_name, DISPLAY_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::extract;

    fn lookup(catalog: &Catalog, name: &str) -> String {
        run_token(catalog, TokenInput { token_name: name.to_string(), theme: TokenTheme::Light })
    }

    #[test]
    fn test_found() {
        let catalog = extract("--vita-color-brand-primary: #003965;");
        assert_eq!(
            lookup(&catalog, "vita-color-brand-primary"),
            "Token: vita-color-brand-primary\nValue: #003965\nDescription: ViTA color token for brand primary"
        );
    }

    #[test]
    fn test_not_found() {
        let catalog = extract("--vita-color-brand-primary: #003965;");
        assert_eq!(
            lookup(&catalog, "vita-color-nope"),
            "Token 'vita-color-nope' not found in ViTA design system"
        );
        // lookups use the full custom property name
        assert!(lookup(&catalog, "color-brand-primary").contains("not found"));
    }

    #[test]
    fn test_theme_is_ignored() {
        let catalog = extract("--vita-spacing-2: 8px;");
        let dark = run_token(
            &catalog,
            TokenInput { token_name: "vita-spacing-2".into(), theme: TokenTheme::Dark },
        );
        assert_eq!(dark, lookup(&catalog, "vita-spacing-2"));
    }

    #[test]
    fn test_auto_is_not_a_token_theme() {
        let parsed: Result<TokenInput, _> = serde_json::from_value(
            serde_json::json!({ "token_name": "x", "theme": "auto" }),
        );
        assert!(parsed.is_err());
    }
}
