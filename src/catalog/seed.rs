//! Built-in descriptors that ship with every catalog.

use indexmap::IndexMap;

use super::{
    AccessibilityGuide, Catalog, ComponentSpec, ContrastRatios, FocusIndicators, LayoutExample,
    ThemeSpec, TokenOrigin, TokenRecord,
};

fn component(class: &str, description: &str, usage: Option<&str>, states: &[&str]) -> ComponentSpec {
    ComponentSpec {
        class: class.to_string(),
        description: description.to_string(),
        usage: usage.map(str::to_string),
        states: states.iter().map(|s| s.to_string()).collect(),
    }
}

fn theme(name: &str, description: &str) -> ThemeSpec {
    ThemeSpec {
        data_attribute: format!("data-theme=\"{}\"", name),
        description: description.to_string(),
        primary_surface: "var(--vita-color-surface-background)".to_string(),
        primary_text: "var(--vita-color-text-on-surface)".to_string(),
    }
}

fn layout(description: &str, components: &[&str]) -> LayoutExample {
    LayoutExample {
        description: description.to_string(),
        components: components.iter().map(|s| s.to_string()).collect(),
    }
}

fn buttons() -> IndexMap<String, ComponentSpec> {
    [
        ("primary", "Primary action button", "Main CTAs, form submissions"),
        ("secondary", "Secondary action button", "Secondary actions, cancel buttons"),
        ("edit", "Edit action button", "Edit operations, modify content"),
        ("delete", "Delete action button", "Destructive actions, remove content"),
    ]
    .into_iter()
    .map(|(name, description, usage)| {
        let class = format!("vita-button vita-button-{}", name);
        (name.to_string(), component(&class, description, Some(usage), &[]))
    })
    .collect()
}

/// Populate the component, theme, guideline and example categories.
pub(super) fn apply(catalog: &mut Catalog) {
    catalog.components.buttons = buttons();

    catalog.components.inputs = IndexMap::from([
        (
            "default".to_string(),
            component(
                "vita-input",
                "Standard text input",
                None,
                &["default", "focus", "error", "disabled"],
            ),
        ),
        ("label".to_string(), component("vita-input-label", "Input label styling", None, &[])),
    ]);

    catalog.components.cards = IndexMap::from([(
        "default".to_string(),
        component(
            "vita-card",
            "Standard content card",
            Some("Content containers, information display"),
            &[],
        ),
    )]);

    catalog.themes.light = Some(theme("light", "Light theme configuration"));
    catalog.themes.dark = Some(theme("dark", "Dark theme configuration"));

    catalog.guidelines.accessibility = Some(AccessibilityGuide {
        contrast_ratios: ContrastRatios {
            normal_text: "4.5:1 minimum (WCAG AA)".to_string(),
            large_text: "3:1 minimum (WCAG AA)".to_string(),
        },
        focus_indicators: FocusIndicators {
            outline: "2px solid var(--vita-color-brand-primary)".to_string(),
            offset: "2px".to_string(),
        },
        semantic_markup: vec![
            "Use proper heading hierarchy (h1-h6)".to_string(),
            "Include ARIA labels where appropriate".to_string(),
            "Use semantic HTML elements".to_string(),
        ],
    });

    catalog.examples.layouts = IndexMap::from([
        (
            "dashboard".to_string(),
            layout("Analytics dashboard layout", &["navigation", "cards", "charts", "tables"]),
        ),
        (
            "form".to_string(),
            layout("Form layout with validation", &["inputs", "labels", "buttons", "validation"]),
        ),
        ("landing".to_string(), layout("Landing page layout", &["hero", "features", "cta", "footer"])),
    ]);
}

pub(super) fn fallback_catalog() -> Catalog {
    let mut catalog = Catalog::empty();
    catalog.colors.insert(
        "color_brand_primary",
        TokenRecord {
            value: "#003965".to_string(),
            origin: TokenOrigin::CssVar("--vita-color-brand-primary".to_string()),
            description: "Primary brand color".to_string(),
        },
    );
    catalog
}
