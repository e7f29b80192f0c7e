//! Configuration for the design-system server
//!
//! Provides types and discovery for `vita.toml`.

pub mod loader;
pub mod schema;

pub use loader::{
    default_config, find_config, find_config_from, find_xdg_config, load_config,
    merge_cli_overrides, project_root, resolve_path, CliOverrides, ConfigError,
};
pub use schema::*;
