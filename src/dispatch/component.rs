//! generate_component tool: render a single design-system component.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::generate::{ComponentKind, ComponentRequest, Generator, Theme};

fn default_variant() -> String {
    "default".to_string()
}

/// Input parameters for the generate_component tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ComponentInput {
    /// Type of component to generate
    #[schemars(extend("enum" = ["button", "input", "card", "badge", "layout"]))]
    pub component_type: String,

    /// Component variant (e.g., 'primary', 'secondary', 'error')
    #[serde(default = "default_variant")]
    pub variant: String,

    /// Theme to apply
    #[serde(default)]
    pub theme: Theme,

    /// Content/text for the component
    #[serde(default)]
    pub content: String,

    /// Additional HTML attributes, emitted as key="value" pairs
    #[serde(default)]
    pub attributes: IndexMap<String, Value>,
}

/// Execute the generate_component tool.
///
/// An unknown component type is reported in the returned text rather than as
/// an error, so this tool always produces output.
pub fn run_component(generator: &Generator, input: ComponentInput) -> String {
    let Ok(kind) = input.component_type.parse::<ComponentKind>() else {
        return format!("Error: Unknown component type '{}'", input.component_type);
    };

    let request = ComponentRequest {
        variant: input.variant,
        theme: input.theme,
        content: input.content,
        attributes: input.attributes,
    };
    let html = generator.component(kind, &request);
    format!("Generated {} component:\n\n```html\n{}\n```", kind.as_str(), html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(args: Value) -> ComponentInput {
        serde_json::from_value(args).expect("valid component input")
    }

    #[test]
    fn test_defaults_applied() {
        let parsed = input(json!({ "component_type": "button" }));
        assert_eq!(parsed.variant, "default");
        assert_eq!(parsed.theme, Theme::Auto);
        assert!(parsed.content.is_empty());
        assert!(parsed.attributes.is_empty());
    }

    #[test]
    fn test_default_button_output() {
        let text = run_component(&Generator::default(), input(json!({ "component_type": "button" })));
        assert_eq!(
            text,
            "Generated button component:\n\n```html\n<button class=\"vita-button\" >Button</button>\n```"
        );
    }

    #[test]
    fn test_primary_button() {
        let text = run_component(
            &Generator::default(),
            input(json!({ "component_type": "button", "variant": "primary" })),
        );
        assert!(text.contains("class=\"vita-button vita-button-primary\""));
    }

    #[test]
    fn test_unknown_component_type_is_text() {
        let text =
            run_component(&Generator::default(), input(json!({ "component_type": "carousel" })));
        assert_eq!(text, "Error: Unknown component type 'carousel'");
    }

    #[test]
    fn test_attribute_order_preserved() {
        let text = run_component(
            &Generator::default(),
            input(json!({
                "component_type": "button",
                "attributes": { "type": "submit", "disabled": "disabled" }
            })),
        );
        assert!(text.contains("type=\"submit\" disabled=\"disabled\""));
    }

    #[test]
    fn test_invalid_theme_rejected() {
        let parsed: Result<ComponentInput, _> =
            serde_json::from_value(json!({ "component_type": "card", "theme": "sepia" }));
        assert!(parsed.is_err());
    }
}
