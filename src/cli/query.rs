//! Offline access to resources and tools

use std::process::ExitCode;

use serde_json::{Map, Value};

use super::{report_engine_error, Context, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::dispatch::{self, GET_TOKEN_VALUE};

/// List resource descriptors, or print the resource at `uri`
pub fn run_resources(context: &Context, uri: Option<&str>) -> ExitCode {
    let engine = context.engine();
    match uri {
        Some(uri) => match engine.read_resource(uri) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => report_engine_error(&e),
        },
        None => {
            for resource in engine.list_resources() {
                println!("{:<36} {}", resource.uri, resource.name);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}

/// Print every tool descriptor as pretty JSON
pub fn run_tools() -> ExitCode {
    match serde_json::to_string_pretty(&dispatch::list_tools()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Parse `--args` into a JSON object.
fn parse_tool_args(args: Option<&str>) -> Result<Option<Map<String, Value>>, String> {
    let Some(text) = args else {
        return Ok(None);
    };
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(_) => Err("--args must be a JSON object".to_string()),
        Err(e) => Err(format!("--args is not valid JSON: {}", e)),
    }
}

/// Run a tool and print its text output
pub fn run_call(context: &Context, tool: &str, args: Option<&str>) -> ExitCode {
    let arguments = match parse_tool_args(args) {
        Ok(arguments) => arguments,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    match context.engine().call_tool(tool, arguments) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => report_engine_error(&e),
    }
}

/// Shorthand for `call get_token_value`
pub fn run_token(context: &Context, name: &str) -> ExitCode {
    let mut arguments = Map::new();
    arguments.insert("token_name".to_string(), Value::String(name.to_string()));
    match context.engine().call_tool(GET_TOKEN_VALUE, Some(arguments)) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => report_engine_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_args() {
        assert_eq!(parse_tool_args(None), Ok(None));
        let map = parse_tool_args(Some(r#"{"code": "<p></p>"}"#)).unwrap().unwrap();
        assert_eq!(map["code"], "<p></p>");
        assert!(parse_tool_args(Some("[1, 2]")).unwrap_err().contains("JSON object"));
        assert!(parse_tool_args(Some("{oops")).unwrap_err().contains("not valid JSON"));
    }
}
