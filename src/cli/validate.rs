//! Validate command implementation

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::validate::validate_design;

/// Validate markup from a file or stdin and print the report
pub fn run_validate(file: Option<&Path>, stdin: bool, check_accessibility: bool) -> ExitCode {
    let code = if stdin {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("Error reading stdin: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
        buf
    } else if let Some(path) = file {
        match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: Cannot read '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        eprintln!("Error: Provide a file or use --stdin");
        return ExitCode::from(EXIT_INVALID_ARGS);
    };

    println!("{}", validate_design(&code, check_accessibility));
    ExitCode::from(EXIT_SUCCESS)
}
