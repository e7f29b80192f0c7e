//! Configuration loading and discovery for `vita.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{VitaConfig, CONFIG_FILE_NAME};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse vita.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the CSS token source
    pub tokens: Option<PathBuf>,
    /// Override the Figma token export
    pub figma: Option<PathBuf>,
    /// Force HTML escaping of generated markup
    pub escape_html: Option<bool>,
}

/// Find vita.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for vita.toml
/// 2. Check XDG_CONFIG_HOME/vita/vita.toml (or ~/.config/vita/vita.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find vita.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("vita").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find vita.toml by walking up from `start`.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a vita.toml file.
///
/// With an explicit `path` the file must exist. Without one, `find_config()`
/// locates it, and a default configuration is returned if nothing is found.
pub fn load_config(path: Option<&Path>) -> Result<VitaConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

fn load_config_file(path: &Path) -> Result<VitaConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: VitaConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Configuration used when no vita.toml is found.
pub fn default_config() -> VitaConfig {
    VitaConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut VitaConfig, overrides: &CliOverrides) {
    if let Some(ref tokens) = overrides.tokens {
        config.sources.tokens = tokens.clone();
    }
    if let Some(ref figma) = overrides.figma {
        config.sources.figma = figma.clone();
    }
    if let Some(escape_html) = overrides.escape_html {
        config.generation.escape_html = escape_html;
    }
}

/// Get the project root directory from a config file path.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
