//! create_layout tool: render a complete page.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::generate::{Generator, Theme};

fn default_true() -> bool {
    true
}

/// Input parameters for the create_layout tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LayoutInput {
    /// Type of layout to create
    #[schemars(extend("enum" = ["dashboard", "form", "landing", "profile", "settings"]))]
    pub layout_type: String,

    /// List of components to include. Accepted but not used by the templates.
    #[serde(default)]
    pub components: Vec<String>,

    /// Theme to apply
    #[serde(default)]
    pub theme: Theme,

    /// Include responsive design. Accepted but does not change the output.
    #[serde(default = "default_true")]
    pub responsive: bool,
}

/// Execute the create_layout tool. Unknown layout types render a placeholder
/// page instead of failing.
pub fn run_layout(generator: &Generator, input: LayoutInput) -> String {
    let html = generator.page(&input.layout_type, input.theme);
    format!("Generated {} layout:\n\n```html\n{}\n```", input.layout_type, html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(args: serde_json::Value) -> String {
        run_layout(&Generator::default(), serde_json::from_value(args).expect("valid layout input"))
    }

    #[test]
    fn test_defaults() {
        let input: LayoutInput = serde_json::from_value(json!({ "layout_type": "form" })).unwrap();
        assert!(input.components.is_empty());
        assert_eq!(input.theme, Theme::Auto);
        assert!(input.responsive);
    }

    #[test]
    fn test_dashboard_has_four_summary_cards() {
        let text = run(json!({ "layout_type": "dashboard" }));
        assert!(text.starts_with("Generated dashboard layout:\n\n```html\n<!DOCTYPE html>"));
        assert_eq!(text.matches("<div class=\"vita-card\" style=\"text-align: center;\">").count(), 4);
        for label in ["Active", "Pending", "Completed", "Errors"] {
            assert!(
                text.contains(&format!("<h3 class=\"vita-text-headline-small\">{}</h3>", label)),
                "missing {}",
                label
            );
        }
        assert!(text.ends_with("</html>\n```"));
    }

    #[test]
    fn test_title_and_theme() {
        let text = run(json!({ "layout_type": "settings", "theme": "dark" }));
        assert!(text.contains("<title>ViTA Design System - Settings</title>"));
        assert!(text.contains("<html lang=\"en\" data-theme=\"dark\">"));
    }

    #[test]
    fn test_components_and_responsive_are_inert() {
        let plain = run(json!({ "layout_type": "landing" }));
        let tuned = run(json!({
            "layout_type": "landing",
            "components": ["hero", "footer"],
            "responsive": false
        }));
        assert_eq!(plain, tuned);
    }

    #[test]
    fn test_unknown_layout_degrades() {
        let text = run(json!({ "layout_type": "gallery" }));
        assert!(text.contains("<div class=\"vita-container\"><h1>Unknown layout type</h1></div>"));
        assert!(text.contains("<title>ViTA Design System - Gallery</title>"));
        assert!(text.contains("data-theme=\"light\""));
    }
}
