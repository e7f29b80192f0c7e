//! Desktop client registration
//!
//! Adds (or replaces) this server's entry under `mcpServers` in the desktop
//! client's JSON configuration. Every other key in that file is preserved.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// File name of the desktop client configuration.
pub const CLIENT_CONFIG_FILE: &str = "claude_desktop_config.json";

/// Errors raised while registering the server
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
    /// No known client config location for this OS
    #[error("Unsupported operating system: {0}")]
    UnsupportedPlatform(String),
    #[error("Failed to access client config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Client config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A value that must be a JSON object is something else
    #[error("Client config field '{0}' is not a JSON object")]
    NotAnObject(String),
}

/// How the client launches the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerEntry {
    pub command: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ServerEntry {
    /// Entry running `command serve` from `cwd`.
    pub fn serve(command: PathBuf, cwd: PathBuf) -> Self {
        Self { command, args: vec!["serve".to_string()], cwd }
    }
}

/// Result of a registration
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub path: PathBuf,
    /// An entry with the same name existed and was replaced
    pub replaced: bool,
    /// The full document as written (or as it would be written)
    pub document: String,
}

/// Client config location for `os` (as in `std::env::consts::OS`).
pub fn client_config_path_for(
    os: &str,
    home: &Path,
    appdata: Option<&Path>,
) -> Result<PathBuf, InstallError> {
    let dir = match os {
        "macos" => home.join("Library").join("Application Support").join("Claude"),
        "windows" => match appdata {
            Some(appdata) => appdata.join("Claude"),
            None => home.join("AppData").join("Roaming").join("Claude"),
        },
        "linux" => home.join(".config").join("Claude"),
        other => return Err(InstallError::UnsupportedPlatform(other.to_string())),
    };
    Ok(dir.join(CLIENT_CONFIG_FILE))
}

/// Client config location for the running platform.
pub fn client_config_path() -> Result<PathBuf, InstallError> {
    let home = env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .ok_or_else(|| InstallError::UnsupportedPlatform("no home directory".to_string()))?;
    let appdata = env::var_os("APPDATA").map(PathBuf::from);
    client_config_path_for(env::consts::OS, &home, appdata.as_deref())
}

/// Insert `entry` as `mcpServers.<name>` into `document`.
///
/// Returns whether an existing entry was replaced.
pub fn register(document: &mut Value, name: &str, entry: &ServerEntry) -> Result<bool, InstallError> {
    let root = document
        .as_object_mut()
        .ok_or_else(|| InstallError::NotAnObject("<root>".to_string()))?;
    let servers = root
        .entry("mcpServers")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| InstallError::NotAnObject("mcpServers".to_string()))?;
    let previous = servers.insert(name.to_string(), serde_json::to_value(entry)?);
    Ok(previous.is_some())
}

/// Register the server in the client config at `path`.
///
/// A missing file is treated as `{}`. With `dry_run` nothing is written.
pub fn install(
    path: &Path,
    name: &str,
    entry: &ServerEntry,
    dry_run: bool,
) -> Result<InstallOutcome, InstallError> {
    let mut document = if path.exists() {
        let text = fs::read_to_string(path)?;
        if text.trim().is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_str(&text)?
        }
    } else {
        Value::Object(Map::new())
    };

    let replaced = register(&mut document, name, entry)?;
    let rendered = serde_json::to_string_pretty(&document)?;

    if !dry_run {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, format!("{}\n", rendered))?;
        tracing::info!(path = %path.display(), name, replaced, "registered MCP server");
    }

    Ok(InstallOutcome { path: path.to_path_buf(), replaced, document: rendered })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn entry() -> ServerEntry {
        ServerEntry::serve(PathBuf::from("/usr/local/bin/vita"), PathBuf::from("/work/vita"))
    }

    #[test]
    fn test_paths_per_platform() {
        let home = Path::new("/home/dev");
        assert_eq!(
            client_config_path_for("linux", home, None).unwrap(),
            PathBuf::from("/home/dev/.config/Claude/claude_desktop_config.json")
        );
        assert_eq!(
            client_config_path_for("macos", home, None).unwrap(),
            PathBuf::from("/home/dev/Library/Application Support/Claude/claude_desktop_config.json")
        );
        assert_eq!(
            client_config_path_for("windows", home, Some(Path::new("/appdata"))).unwrap(),
            PathBuf::from("/appdata/Claude/claude_desktop_config.json")
        );
        assert!(matches!(
            client_config_path_for("haiku", home, None),
            Err(InstallError::UnsupportedPlatform(_))
        ));
    }

    #[test]
    fn test_register_into_empty_document() {
        let mut doc = json!({});
        assert!(!register(&mut doc, "vita-design-system", &entry()).unwrap());
        assert_eq!(
            doc,
            json!({
                "mcpServers": {
                    "vita-design-system": {
                        "command": "/usr/local/bin/vita",
                        "args": ["serve"],
                        "cwd": "/work/vita"
                    }
                }
            })
        );
    }

    #[test]
    fn test_register_preserves_other_keys_and_replaces_entry() {
        let mut doc = json!({
            "theme": "dark",
            "mcpServers": {
                "other": { "command": "other-server" },
                "vita-design-system": { "command": "python3", "args": ["server.py"] }
            }
        });
        assert!(register(&mut doc, "vita-design-system", &entry()).unwrap());
        assert_eq!(doc["theme"], "dark");
        assert_eq!(doc["mcpServers"]["other"]["command"], "other-server");
        assert_eq!(doc["mcpServers"]["vita-design-system"]["args"], json!(["serve"]));
    }

    #[test]
    fn test_register_rejects_non_objects() {
        let mut doc = json!([]);
        assert!(matches!(
            register(&mut doc, "x", &entry()),
            Err(InstallError::NotAnObject(ref f)) if f == "<root>"
        ));

        let mut doc = json!({ "mcpServers": [] });
        assert!(matches!(
            register(&mut doc, "x", &entry()),
            Err(InstallError::NotAnObject(ref f)) if f == "mcpServers"
        ));
    }

    #[test]
    fn test_install_writes_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join("Claude").join(CLIENT_CONFIG_FILE);

        let outcome = install(&path, "vita-design-system", &entry(), false).unwrap();
        assert!(!outcome.replaced);
        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["mcpServers"]["vita-design-system"]["cwd"], "/work/vita");

        let outcome = install(&path, "vita-design-system", &entry(), false).unwrap();
        assert!(outcome.replaced);
    }

    #[test]
    fn test_install_dry_run_writes_nothing() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join(CLIENT_CONFIG_FILE);
        let outcome = install(&path, "vita", &entry(), true).unwrap();
        assert!(!path.exists());
        assert!(outcome.document.contains("\"mcpServers\""));
    }

    #[test]
    fn test_install_rejects_invalid_json() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join(CLIENT_CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(install(&path, "vita", &entry(), false), Err(InstallError::Json(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }
}
