//! Install command implementation

use std::path::Path;
use std::process::ExitCode;

use super::{Context, EXIT_ERROR, EXIT_SUCCESS};
use crate::install::{client_config_path, install, ServerEntry};

/// Register the server in the desktop client config
pub fn run_install(context: &Context, client_config: Option<&Path>, dry_run: bool) -> ExitCode {
    let path = match client_config {
        Some(p) => p.to_path_buf(),
        None => match client_config_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
    };

    let command = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            eprintln!("Error: Cannot locate the vita executable: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let entry = ServerEntry::serve(command, context.root.clone());
    let name = &context.config.server.name;

    match install(&path, name, &entry, dry_run) {
        Ok(outcome) if dry_run => {
            println!("{}", outcome.document);
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(outcome) => {
            let verb = if outcome.replaced { "Updated" } else { "Added" };
            println!("✅ {} '{}' in {}", verb, name, outcome.path.display());
            println!("🔄 Restart the desktop client to apply changes");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Install failed: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
