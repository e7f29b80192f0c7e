//! `vita` - command-line front end and MCP server for the ViTA design system

use std::process::ExitCode;

use vita_design::cli;

fn main() -> ExitCode {
    cli::run()
}
