//! MCP (Model Context Protocol) adapter for the design engine
//!
//! Start the server with `vita serve` (feature `mcp`, enabled by default).

mod server;

pub use server::{run_server, to_error_data, VitaMcpServer};
