//! Design catalog model
//!
//! The catalog is the structured registry of everything the server knows:
//! three token tables (colors, typography, spacing) and four descriptor
//! groups (components, themes, guidelines, examples). The category set is
//! closed; token tables are additive-only.

mod seed;
mod store;

pub use store::{build_catalog, CatalogStore, TokenSource, TokenSources};

use indexmap::IndexMap;
use serde::Serialize;

/// CSS / class namespace of the design system.
pub const NAMESPACE: &str = "vita";

/// Human-facing name of the design system.
pub const DISPLAY_NAME: &str = "ViTA";

/// Top-level catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Colors,
    Typography,
    Spacing,
    Components,
    Themes,
    Guidelines,
    Examples,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 7] = [
        Category::Colors,
        Category::Typography,
        Category::Spacing,
        Category::Components,
        Category::Themes,
        Category::Guidelines,
        Category::Examples,
    ];

    /// Categories that hold token records, in lookup order.
    pub const TOKEN_TABLES: [Category; 3] =
        [Category::Colors, Category::Typography, Category::Spacing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Typography => "typography",
            Category::Spacing => "spacing",
            Category::Components => "components",
            Category::Themes => "themes",
            Category::Guidelines => "guidelines",
            Category::Examples => "examples",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a token record came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenOrigin {
    /// CSS custom property name, e.g. `--vita-color-brand-primary`
    CssVar(String),
    /// Dotted path in the Figma token export, e.g. `color.brand.primary.light`
    FigmaPath(String),
}

/// A single design token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    pub value: String,
    #[serde(flatten)]
    pub origin: TokenOrigin,
    pub description: String,
}

impl TokenRecord {
    /// The CSS custom property this token was declared as, if any.
    pub fn css_var(&self) -> Option<&str> {
        match &self.origin {
            TokenOrigin::CssVar(name) => Some(name),
            TokenOrigin::FigmaPath(_) => None,
        }
    }
}

/// Insertion-ordered map of token name to record.
///
/// Insertion never replaces an existing entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenTable {
    entries: IndexMap<String, TokenRecord>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless the name is already taken.
    ///
    /// Returns `true` if the record was inserted.
    pub fn insert(&mut self, name: impl Into<String>, record: TokenRecord) -> bool {
        match self.entries.entry(name.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&TokenRecord> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Usage notes for a component class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSpec {
    pub class: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentLibrary {
    pub buttons: IndexMap<String, ComponentSpec>,
    pub inputs: IndexMap<String, ComponentSpec>,
    pub cards: IndexMap<String, ComponentSpec>,
}

impl ComponentLibrary {
    fn is_empty(&self) -> bool {
        self.buttons.is_empty() && self.inputs.is_empty() && self.cards.is_empty()
    }
}

/// Static theme descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSpec {
    pub data_attribute: String,
    pub description: String,
    pub primary_surface: String,
    pub primary_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThemeSet {
    pub light: Option<ThemeSpec>,
    pub dark: Option<ThemeSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContrastRatios {
    pub normal_text: String,
    pub large_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusIndicators {
    pub outline: String,
    pub offset: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessibilityGuide {
    pub contrast_ratios: ContrastRatios,
    pub focus_indicators: FocusIndicators,
    pub semantic_markup: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Guidelines {
    pub accessibility: Option<AccessibilityGuide>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutExample {
    pub description: String,
    pub components: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Examples {
    pub layouts: IndexMap<String, LayoutExample>,
}

/// The full design catalog.
///
/// All seven categories are always present; a freshly constructed catalog is
/// empty but shaped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    pub colors: TokenTable,
    pub typography: TokenTable,
    pub spacing: TokenTable,
    pub components: ComponentLibrary,
    pub themes: ThemeSet,
    pub guidelines: Guidelines,
    pub examples: Examples,
}

impl Catalog {
    /// An empty catalog with every category present.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The single-token catalog used when nothing could be loaded.
    pub fn fallback() -> Self {
        seed::fallback_catalog()
    }

    /// Add the built-in component, theme, guideline and example descriptors.
    pub fn seed_descriptors(&mut self) {
        seed::apply(self);
    }

    pub fn tokens(&self, category: Category) -> Option<&TokenTable> {
        match category {
            Category::Colors => Some(&self.colors),
            Category::Typography => Some(&self.typography),
            Category::Spacing => Some(&self.spacing),
            _ => None,
        }
    }

    pub fn tokens_mut(&mut self, category: Category) -> Option<&mut TokenTable> {
        match category {
            Category::Colors => Some(&mut self.colors),
            Category::Typography => Some(&mut self.typography),
            Category::Spacing => Some(&mut self.spacing),
            _ => None,
        }
    }

    /// Total number of token records across all tables.
    pub fn token_count(&self) -> usize {
        Category::TOKEN_TABLES.iter().filter_map(|c| self.tokens(*c)).map(TokenTable::len).sum()
    }

    /// True if the catalog holds neither tokens nor descriptors.
    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
            && self.components.is_empty()
            && self.themes.light.is_none()
            && self.themes.dark.is_none()
            && self.guidelines.accessibility.is_none()
            && self.examples.layouts.is_empty()
    }

    /// First record, scanning colors, typography then spacing, whose CSS
    /// custom property equals `css_var`.
    pub fn find_by_css_var(&self, css_var: &str) -> Option<(&str, &TokenRecord)> {
        Category::TOKEN_TABLES
            .iter()
            .filter_map(|c| self.tokens(*c))
            .flat_map(TokenTable::iter)
            .find(|(_, record)| record.css_var() == Some(css_var))
    }
}

/// A borrowed, serializable view of one part of the catalog
#[derive(Debug, Clone, Copy)]
pub enum CatalogSlice<'a> {
    Tokens(&'a TokenTable),
    Components(&'a IndexMap<String, ComponentSpec>),
    Theme(Option<&'a ThemeSpec>),
    Guidelines(Option<&'a AccessibilityGuide>),
    Layouts(&'a IndexMap<String, LayoutExample>),
}

impl CatalogSlice<'_> {
    /// Serialize as two-space indented JSON. Absent slices become `{}`.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        match self {
            CatalogSlice::Tokens(table) => serde_json::to_string_pretty(table),
            CatalogSlice::Components(map) => serde_json::to_string_pretty(map),
            CatalogSlice::Theme(Some(theme)) => serde_json::to_string_pretty(theme),
            CatalogSlice::Guidelines(Some(guide)) => serde_json::to_string_pretty(guide),
            CatalogSlice::Layouts(map) => serde_json::to_string_pretty(map),
            CatalogSlice::Theme(None) | CatalogSlice::Guidelines(None) => Ok("{}".to_string()),
        }
    }
}
