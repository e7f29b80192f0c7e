//! Core MCP server implementation.

use std::sync::Arc;

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use tracing::{debug, info};

use crate::engine::DesignEngine;
use crate::error::EngineError;
use crate::resources::ResourceDescriptor;

/// Map an engine error onto the MCP error it is reported as.
pub fn to_error_data(err: EngineError) -> ErrorData {
    let message = err.to_string();
    match err {
        EngineError::UnknownResource(_) => ErrorData::resource_not_found(message, None),
        EngineError::UnknownTool(_) | EngineError::InvalidArguments { .. } => {
            ErrorData::invalid_params(message, None)
        }
        _ => ErrorData::internal_error(message, None),
    }
}

fn to_resource(descriptor: ResourceDescriptor) -> Resource {
    RawResource {
        uri: descriptor.uri.into(),
        name: descriptor.name.into(),
        title: None,
        description: Some(descriptor.description.into()),
        mime_type: Some(descriptor.mime_type.into()),
        size: None,
        icons: None,
        meta: None,
    }
    .no_annotation()
}

/// The design-system MCP server
///
/// Exposes the catalog as `design://` resources and the four generation and
/// lookup operations as tools.
#[derive(Debug, Clone)]
pub struct VitaMcpServer {
    engine: Arc<DesignEngine>,
    name: String,
}

impl VitaMcpServer {
    pub fn new(engine: Arc<DesignEngine>, name: impl Into<String>) -> Self {
        Self { engine, name: name.into() }
    }

    pub fn engine(&self) -> &DesignEngine {
        &self.engine
    }
}

impl ServerHandler for VitaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().enable_resources().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "ViTA design system server. Read design:// resources for tokens, \
                 components, themes, guidelines and layout examples. Use \
                 generate_component and create_layout to produce markup, \
                 validate_design to check markup, and get_token_value to look up \
                 a token."
                    .into(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let resources = self.engine.list_resources().into_iter().map(to_resource).collect();
        Ok(ListResourcesResult::with_all_items(resources))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        debug!(uri = %request.uri, "resources/read");
        let text = self.engine.read_resource(&request.uri).map_err(to_error_data)?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: request.uri,
                mime_type: Some(crate::resources::MIME_JSON.into()),
                text,
                meta: None,
            }],
        })
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools = self
            .engine
            .list_tools()
            .into_iter()
            .map(|t| Tool::new(t.name, t.description, Arc::new(t.input_schema)))
            .collect();
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let text =
            self.engine.call_tool(&request.name, request.arguments).map_err(to_error_data)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

/// Run the MCP server on stdin/stdout until the client disconnects.
pub async fn run_server(
    engine: Arc<DesignEngine>,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let server = VitaMcpServer::new(engine, name);
    info!(name, "starting MCP server on stdio");
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}
