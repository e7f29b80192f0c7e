//! The design engine: one catalog store plus one generator.
//!
//! Both front ends (CLI and MCP server) build a [`DesignEngine`] and route
//! every request through it.

use std::path::Path;

use serde_json::{Map, Value};

use crate::catalog::{Catalog, CatalogStore, TokenSource, TokenSources};
use crate::config::{resolve_path, VitaConfig};
use crate::dispatch::{self, ToolDescriptor};
use crate::error::EngineError;
use crate::generate::Generator;
use crate::markup::Interpolation;
use crate::resources::{self, ResourceDescriptor};

#[derive(Debug)]
pub struct DesignEngine {
    store: CatalogStore,
    generator: Generator,
}

impl DesignEngine {
    pub fn new(store: CatalogStore, generator: Generator) -> Self {
        Self { store, generator }
    }

    /// Engine reading the sources named in `config`, relative to `root`.
    pub fn from_config(config: &VitaConfig, root: &Path) -> Self {
        let sources = token_sources(config, root);
        let interpolation = Interpolation::from_escape_flag(config.generation.escape_html);
        Self::new(CatalogStore::new(sources), Generator::new(interpolation))
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// The catalog, built on first use.
    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    pub fn list_resources(&self) -> Vec<ResourceDescriptor> {
        resources::list_resources()
    }

    pub fn read_resource(&self, uri: &str) -> Result<String, EngineError> {
        resources::read_resource(self.store.catalog(), uri)
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        dispatch::list_tools()
    }

    pub fn call_tool(
        &self,
        name: &str,
        arguments: Option<Map<String, Value>>,
    ) -> Result<String, EngineError> {
        dispatch::call_tool(&self.store, &self.generator, name, arguments)
    }
}

/// Token sources for `config`, with relative paths resolved against `root`.
pub fn token_sources(config: &VitaConfig, root: &Path) -> TokenSources {
    TokenSources::new(TokenSource::File(resolve_path(root, &config.sources.tokens)))
        .with_secondary(TokenSource::File(resolve_path(root, &config.sources.figma)))
}
