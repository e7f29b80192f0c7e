//! Tool dispatcher
//!
//! Four deterministic tools, each backed by a typed input struct whose JSON
//! schema is derived with `schemars`. Arguments arrive as a loose JSON object
//! and are deserialized into the input struct before the tool runs.

pub mod component;
pub mod layout;
pub mod token;
pub mod validate;

pub use component::ComponentInput;
pub use layout::LayoutInput;
pub use token::{TokenInput, TokenTheme};
pub use validate::ValidateInput;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::error::EngineError;
use crate::generate::Generator;

pub const GENERATE_COMPONENT: &str = "generate_component";
pub const CREATE_LAYOUT: &str = "create_layout";
pub const VALIDATE_DESIGN: &str = "validate_design";
pub const GET_TOKEN_VALUE: &str = "get_token_value";

/// Name, description and input schema of one tool
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Map<String, Value>,
}

/// JSON schema of `T` as an object map.
pub fn input_schema<T: JsonSchema>() -> Map<String, Value> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(map)) => map,
        _ => {
            let mut map = Map::new();
            map.insert("type".to_string(), Value::String("object".to_string()));
            map
        }
    }
}

/// The four tool descriptors, in a fixed order.
pub fn list_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: GENERATE_COMPONENT,
            description: "Generate HTML/CSS code for ViTA design system components",
            input_schema: input_schema::<ComponentInput>(),
        },
        ToolDescriptor {
            name: CREATE_LAYOUT,
            description: "Create complete page layouts using ViTA design system",
            input_schema: input_schema::<LayoutInput>(),
        },
        ToolDescriptor {
            name: VALIDATE_DESIGN,
            description: "Validate that provided CSS/HTML uses correct ViTA design tokens",
            input_schema: input_schema::<ValidateInput>(),
        },
        ToolDescriptor {
            name: GET_TOKEN_VALUE,
            description: "Get the current value of a specific design token",
            input_schema: input_schema::<TokenInput>(),
        },
    ]
}

fn parse_args<T: DeserializeOwned>(tool: &str, args: Map<String, Value>) -> Result<T, EngineError> {
    serde_json::from_value(Value::Object(args)).map_err(|e| EngineError::InvalidArguments {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

/// Run tool `name` with `arguments` (absent arguments mean `{}`).
///
/// The catalog is built before routing, whichever tool is called.
pub fn call_tool(
    store: &CatalogStore,
    generator: &Generator,
    name: &str,
    arguments: Option<Map<String, Value>>,
) -> Result<String, EngineError> {
    let args = arguments.unwrap_or_default();
    let catalog = store.catalog();
    debug!(tool = name, "dispatching tool call");

    match name {
        GENERATE_COMPONENT => {
            Ok(component::run_component(generator, parse_args(name, args)?))
        }
        CREATE_LAYOUT => Ok(layout::run_layout(generator, parse_args(name, args)?)),
        VALIDATE_DESIGN => Ok(validate::run_validate(parse_args(name, args)?)),
        GET_TOKEN_VALUE => Ok(token::run_token(catalog, parse_args(name, args)?)),
        _ => Err(EngineError::UnknownTool(name.to_string())),
    }
}
