//! ViTA design system engine and MCP server
//!
//! This library provides functionality to:
//! - Parse `--vita-*` CSS custom properties into a typed design catalog
//! - Merge a Figma token export into that catalog
//! - Serve catalog slices as `design://` resources
//! - Generate component and page markup and validate existing markup
//! - Expose all of the above over the Model Context Protocol

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod figma;
pub mod generate;
pub mod install;
pub mod logging;
pub mod markup;
#[cfg(feature = "mcp")]
pub mod mcp;
pub mod resources;
pub mod tokens;
pub mod validate;

pub use catalog::{Catalog, CatalogStore, TokenSource, TokenSources};
pub use engine::DesignEngine;
pub use error::EngineError;
