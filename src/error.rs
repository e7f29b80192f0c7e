//! Error taxonomy for the design-system engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the catalog, resolver and dispatcher.
///
/// `SourceUnreadable` is only ever logged: catalog construction recovers from
/// it locally. The remaining variants are caller mistakes and are surfaced to
/// the transport as error responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// A token source could not be read or parsed
    #[error("failed to load token source {}: {reason}", path.display())]
    SourceUnreadable { path: PathBuf, reason: String },
    /// Resource URI outside the fixed set
    #[error("Unknown resource URI: {0}")]
    UnknownResource(String),
    /// Tool name outside the fixed set
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    /// Tool arguments did not match the tool's input schema
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },
    /// Catalog slice serialization failed
    #[error("Failed to serialize resource: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl EngineError {
    /// Short machine-readable name for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::SourceUnreadable { .. } => "source_unreadable",
            EngineError::UnknownResource(_) => "unknown_resource",
            EngineError::UnknownTool(_) => "unknown_tool",
            EngineError::InvalidArguments { .. } => "invalid_arguments",
            EngineError::Serialize(_) => "serialize",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = EngineError::UnknownResource("design://nope".into());
        assert_eq!(err.to_string(), "Unknown resource URI: design://nope");
        assert_eq!(err.kind(), "unknown_resource");

        let err = EngineError::UnknownTool("paint".into());
        assert_eq!(err.to_string(), "Unknown tool: paint");
    }

    #[test]
    fn test_source_unreadable_includes_path() {
        let err = EngineError::SourceUnreadable {
            path: PathBuf::from("DESIGN_TOKENS.css"),
            reason: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("DESIGN_TOKENS.css"));
        assert!(msg.contains("No such file"));
    }
}
