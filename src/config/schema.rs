//! Configuration schema types for `vita.toml`
//!
//! Every section is optional; a missing file and an empty file produce the
//! same configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "vita.toml";

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Token source locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// CSS file with `--vita-*` custom properties
    #[serde(default = "default_tokens")]
    pub tokens: PathBuf,
    /// Figma token export merged on top of the CSS tokens
    #[serde(default = "default_figma")]
    pub figma: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self { tokens: default_tokens(), figma: default_figma() }
    }
}

fn default_tokens() -> PathBuf {
    PathBuf::from("DESIGN_TOKENS.css")
}

fn default_figma() -> PathBuf {
    PathBuf::from("FIGMA_DESIGN_TOKENS.json")
}

/// MCP server identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name reported to clients and used as the client-config key
    #[serde(default = "default_server_name")]
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { name: default_server_name() }
    }
}

fn default_server_name() -> String {
    "vita-design-system".to_string()
}

/// Markup generation options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// HTML-escape caller-supplied text in generated markup
    #[serde(default)]
    pub escape_html: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when neither `--log-level` nor `RUST_LOG` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// Complete `vita.toml` configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitaConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Validation error for config
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "sources.tokens")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: '{}' {}", CONFIG_FILE_NAME, self.field, self.message)
    }
}

impl VitaConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.sources.tokens.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "sources.tokens".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }
        if self.sources.figma.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "sources.figma".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        if self.server.name.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "server.name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                errors.push(ConfigValidationError {
                    field: "logging.level".to_string(),
                    message: format!("must be one of: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: VitaConfig = toml::from_str("").unwrap();
        assert_eq!(config, VitaConfig::default());
        assert_eq!(config.sources.tokens, PathBuf::from("DESIGN_TOKENS.css"));
        assert_eq!(config.sources.figma, PathBuf::from("FIGMA_DESIGN_TOKENS.json"));
        assert_eq!(config.server.name, "vita-design-system");
        assert!(!config.generation.escape_html);
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[sources]
tokens = "styles/tokens.css"
figma = "design/figma.json"

[server]
name = "vita-staging"

[generation]
escape_html = true

[logging]
level = "debug"
"#;
        let config: VitaConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.sources.tokens, PathBuf::from("styles/tokens.css"));
        assert_eq!(config.sources.figma, PathBuf::from("design/figma.json"));
        assert_eq!(config.server.name, "vita-staging");
        assert!(config.generation.escape_html);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: VitaConfig = toml::from_str("[sources]\nfigma = \"f.json\"\n").unwrap();
        assert_eq!(config.sources.tokens, PathBuf::from("DESIGN_TOKENS.css"));
        assert_eq!(config.sources.figma, PathBuf::from("f.json"));
    }

    #[test]
    fn test_validate_rejects_empty_values() {
        let mut config = VitaConfig::default();
        config.sources.tokens = PathBuf::new();
        config.server.name = "  ".to_string();
        let errors = config.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["sources.tokens", "server.name"]);
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = VitaConfig::default();
        config.logging.level = Some("WARN".to_string());
        assert!(config.validate().is_empty());

        config.logging.level = Some("loud".to_string());
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("vita.toml: 'logging.level' must be one of"));
    }

    #[test]
    fn test_wrong_value_type_is_parse_error() {
        assert!(toml::from_str::<VitaConfig>("[generation]\nescape_html = \"yes\"\n").is_err());
    }
}
