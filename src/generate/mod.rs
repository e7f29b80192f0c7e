//! Component and page generation
//!
//! Fixed HTML templates filled with caller-supplied variant, content,
//! attributes and theme. Caller text goes through the generator's
//! [`Interpolation`] policy.

mod layouts;

pub use layouts::{title_case, LayoutKind};

use std::str::FromStr;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::markup::Interpolation;

/// Theme accepted by the generators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the surrounding document
    #[default]
    Auto,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    /// ` data-theme="..."` for explicit themes, empty for auto.
    fn component_attr(&self) -> String {
        match self {
            Theme::Auto => String::new(),
            theme => format!(" data-theme=\"{}\"", theme.as_str()),
        }
    }
}

/// Component templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Button,
    Input,
    Card,
    Badge,
    Layout,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Button,
        ComponentKind::Input,
        ComponentKind::Card,
        ComponentKind::Badge,
        ComponentKind::Layout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Input => "input",
            ComponentKind::Card => "card",
            ComponentKind::Badge => "badge",
            ComponentKind::Layout => "layout",
        }
    }
}

impl FromStr for ComponentKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL.into_iter().find(|k| k.as_str() == s).ok_or(())
    }
}

/// Everything a component template can draw on
#[derive(Debug, Clone, Default)]
pub struct ComponentRequest {
    pub variant: String,
    pub theme: Theme,
    pub content: String,
    pub attributes: IndexMap<String, Value>,
}

impl ComponentRequest {
    pub fn new(variant: impl Into<String>) -> Self {
        Self { variant: variant.into(), ..Default::default() }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    fn content_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.content.is_empty() {
            default
        } else {
            &self.content
        }
    }

    fn is_default_variant(&self) -> bool {
        self.variant == "default"
    }
}

/// Renders components and full pages
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    interpolation: Interpolation,
}

impl Generator {
    pub fn new(interpolation: Interpolation) -> Self {
        Self { interpolation }
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn component(&self, kind: ComponentKind, request: &ComponentRequest) -> String {
        match kind {
            ComponentKind::Button => self.button(request),
            ComponentKind::Input => self.input(request),
            ComponentKind::Card => self.card(request),
            ComponentKind::Badge => self.badge(request),
            ComponentKind::Layout => self.grid(request),
        }
    }

    fn attr_or(&self, request: &ComponentRequest, key: &str, default: &str) -> String {
        request
            .attributes
            .get(key)
            .map(|v| self.interpolation.value(v))
            .unwrap_or_else(|| default.to_string())
    }

    fn button(&self, request: &ComponentRequest) -> String {
        let ip = self.interpolation;
        let class_name = if request.is_default_variant() {
            "vita-button".to_string()
        } else {
            format!("vita-button vita-button-{}", ip.text(&request.variant))
        };
        format!(
            "<button class=\"{}\"{} {}>{}</button>",
            class_name,
            request.theme.component_attr(),
            ip.attributes(&request.attributes),
            ip.text(request.content_or("Button"))
        )
    }

    fn input(&self, request: &ComponentRequest) -> String {
        let ip = self.interpolation;
        let error_class = if request.variant == "error" { " error" } else { "" };
        format!(
            "<div class=\"demo-input-group\"{theme}>\n    \
             <label class=\"vita-input-label\">{label}</label>\n    \
             <input type=\"{input_type}\" class=\"vita-input{error_class}\" placeholder=\"{placeholder}\">\n\
             </div>",
            theme = request.theme.component_attr(),
            label = ip.text(request.content_or("Label")),
            input_type = self.attr_or(request, "type", "text"),
            error_class = error_class,
            placeholder = self.attr_or(request, "placeholder", "Enter value"),
        )
    }

    fn card(&self, request: &ComponentRequest) -> String {
        format!(
            "<div class=\"vita-card\"{theme}>\n    \
             <h3 class=\"vita-text-headline-small\">{title}</h3>\n    \
             <p class=\"vita-text-body-medium\">{content}</p>\n\
             </div>",
            theme = request.theme.component_attr(),
            title = self.attr_or(request, "title", "Card Title"),
            content = self.interpolation.text(request.content_or("Card content goes here...")),
        )
    }

    fn badge(&self, request: &ComponentRequest) -> String {
        let ip = self.interpolation;
        let class_name = if request.is_default_variant() {
            "vita-status-badge".to_string()
        } else {
            format!("vita-status-badge vita-status-badge-{}", ip.text(&request.variant))
        };
        format!(
            "<span class=\"{}\"{}>{}</span>",
            class_name,
            request.theme.component_attr(),
            ip.text(request.content_or("Badge"))
        )
    }

    fn grid(&self, request: &ComponentRequest) -> String {
        let columns = self.attr_or(request, "columns", "2");
        format!(
            "<div class=\"vita-container\"{theme}>\n    \
             <div class=\"grid grid-{columns}\">\n        \
             <div class=\"vita-card\">\n            \
             <h3>Section 1</h3>\n            \
             <p>Content here...</p>\n        \
             </div>\n        \
             <div class=\"vita-card\">\n            \
             <h3>Section 2</h3>\n            \
             <p>Content here...</p>\n        \
             </div>\n    \
             </div>\n\
             </div>",
            theme = request.theme.component_attr(),
            columns = columns,
        )
    }

    /// A complete HTML page for `layout_type`. Unknown layout types get a
    /// placeholder body inside the same page shell.
    pub fn page(&self, layout_type: &str, theme: Theme) -> String {
        let body = match layout_type.parse::<LayoutKind>() {
            Ok(kind) => kind.body(),
            Err(()) => layouts::UNKNOWN_LAYOUT_BODY,
        };
        layouts::page_shell(&self.interpolation.text(&title_case(layout_type)), theme, body)
    }
}
