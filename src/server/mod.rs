//! MCP transport - JSON-RPC 2.0 over stdin/stdout
//!
//! Provides:
//! - Request/response/error message types
//! - Newline-delimited JSON server loop
//! - Method routing (initialize, ping, tools/list, tools/call)

pub mod messages;
pub mod stdio;

pub use messages::{ErrorCode, McpRequest, McpResponse, RpcError};
pub use stdio::McpServer;
