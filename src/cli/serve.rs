//! Serve command implementation

use std::process::ExitCode;
use std::sync::Arc;

use super::{Context, EXIT_ERROR, EXIT_SUCCESS};

/// Run the MCP server until stdin closes
pub fn run_serve(context: &Context) -> ExitCode {
    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: Failed to create async runtime: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let engine = Arc::new(context.engine());
    match rt.block_on(crate::mcp::run_server(engine, &context.config.server.name)) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: MCP server failed: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
