//! Resource resolver: the fixed set of `design://` resources.

use serde::Serialize;

use crate::catalog::{Catalog, CatalogSlice};
use crate::error::EngineError;

/// MIME type of every resource.
pub const MIME_JSON: &str = "application/json";

/// The ten readable catalog slices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Colors,
    Typography,
    Spacing,
    Buttons,
    Inputs,
    Cards,
    LightTheme,
    DarkTheme,
    Accessibility,
    Layouts,
}

impl Resource {
    pub const ALL: [Resource; 10] = [
        Resource::Colors,
        Resource::Typography,
        Resource::Spacing,
        Resource::Buttons,
        Resource::Inputs,
        Resource::Cards,
        Resource::LightTheme,
        Resource::DarkTheme,
        Resource::Accessibility,
        Resource::Layouts,
    ];

    pub fn uri(&self) -> &'static str {
        match self {
            Resource::Colors => "design://tokens/colors",
            Resource::Typography => "design://tokens/typography",
            Resource::Spacing => "design://tokens/spacing",
            Resource::Buttons => "design://components/buttons",
            Resource::Inputs => "design://components/inputs",
            Resource::Cards => "design://components/cards",
            Resource::LightTheme => "design://themes/light",
            Resource::DarkTheme => "design://themes/dark",
            Resource::Accessibility => "design://guidelines/accessibility",
            Resource::Layouts => "design://examples/layouts",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Colors => "Color Tokens",
            Resource::Typography => "Typography Tokens",
            Resource::Spacing => "Spacing System",
            Resource::Buttons => "Button Components",
            Resource::Inputs => "Input Components",
            Resource::Cards => "Card Components",
            Resource::LightTheme => "Light Theme",
            Resource::DarkTheme => "Dark Theme",
            Resource::Accessibility => "Accessibility Guidelines",
            Resource::Layouts => "Layout Examples",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Resource::Colors => {
                "Complete color system including brand, surface, semantic, and functional colors"
            }
            Resource::Typography => "Font families, sizes, weights, and text styles",
            Resource::Spacing => "4px-based spacing tokens for consistent layouts",
            Resource::Buttons => "Button variants, states, and usage guidelines",
            Resource::Inputs => "Form input styles and validation states",
            Resource::Cards => "Card layouts and container styles",
            Resource::LightTheme => "Light theme configuration and tokens",
            Resource::DarkTheme => "Dark theme configuration and tokens",
            Resource::Accessibility => "WCAG 2.1 AA compliance guidelines and best practices",
            Resource::Layouts => "Pre-built layout templates and patterns",
        }
    }

    /// Look up a resource by exact URI.
    pub fn from_uri(uri: &str) -> Option<Resource> {
        Resource::ALL.into_iter().find(|r| r.uri() == uri)
    }

    /// The part of `catalog` this resource exposes.
    pub fn slice<'a>(&self, catalog: &'a Catalog) -> CatalogSlice<'a> {
        match self {
            Resource::Colors => CatalogSlice::Tokens(&catalog.colors),
            Resource::Typography => CatalogSlice::Tokens(&catalog.typography),
            Resource::Spacing => CatalogSlice::Tokens(&catalog.spacing),
            Resource::Buttons => CatalogSlice::Components(&catalog.components.buttons),
            Resource::Inputs => CatalogSlice::Components(&catalog.components.inputs),
            Resource::Cards => CatalogSlice::Components(&catalog.components.cards),
            Resource::LightTheme => CatalogSlice::Theme(catalog.themes.light.as_ref()),
            Resource::DarkTheme => CatalogSlice::Theme(catalog.themes.dark.as_ref()),
            Resource::Accessibility => {
                CatalogSlice::Guidelines(catalog.guidelines.accessibility.as_ref())
            }
            Resource::Layouts => CatalogSlice::Layouts(&catalog.examples.layouts),
        }
    }

    pub fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor {
            uri: self.uri(),
            name: self.name(),
            description: self.description(),
            mime_type: MIME_JSON,
        }
    }
}

/// Static listing entry for a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

/// Descriptors for all ten resources. Independent of catalog contents.
pub fn list_resources() -> Vec<ResourceDescriptor> {
    Resource::ALL.iter().map(Resource::descriptor).collect()
}

/// Serialize the slice behind `uri` as indented JSON.
pub fn read_resource(catalog: &Catalog, uri: &str) -> Result<String, EngineError> {
    let resource =
        Resource::from_uri(uri).ok_or_else(|| EngineError::UnknownResource(uri.to_string()))?;
    Ok(resource.slice(catalog).to_json_pretty()?)
}
