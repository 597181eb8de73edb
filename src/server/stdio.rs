//! MCP server loop over stdin/stdout
//!
//! Reads newline-delimited JSON-RPC requests from stdin, dispatches them,
//! and writes one response line per request. Requests are processed in
//! order, one at a time; each tools/call awaits its remote call before the
//! next line is read. Logging goes to the log file only - stdout belongs
//! to the protocol.

use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::error::{BookrError, Result};
use crate::server::messages::{McpRequest, McpResponse, RpcError};
use crate::tools::ToolRegistry;

/// MCP protocol revision this server speaks
pub const PROTOCOL_VERSION: &str = "2025-06-18";

/// Stdio-backed MCP server
pub struct McpServer {
    name: String,
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a server advertising the given name over the given tools
    pub fn new(name: impl Into<String>, registry: ToolRegistry) -> Self {
        Self {
            name: name.into(),
            registry,
        }
    }

    /// Run the server until stdin closes
    pub async fn run(&self) -> Result<()> {
        let mut reader = BufReader::new(tokio::io::stdin());
        let mut writer = tokio::io::stdout();
        let mut line = String::new();

        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .await
                .map_err(|e| BookrError::Transport(format!("Failed to read stdin: {}", e)))?;

            if read == 0 {
                // EOF - client disconnected
                log::info!("stdin closed, shutting down");
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<McpRequest>(trimmed) {
                Ok(request) => self.handle(request).await,
                Err(e) => Some(McpResponse::error(
                    Value::Null,
                    RpcError::parse_error(format!("Parse error: {}", e)),
                )),
            };

            if let Some(response) = response {
                Self::write_response(&mut writer, &response).await?;
            }
        }

        Ok(())
    }

    async fn write_response(
        writer: &mut (impl AsyncWriteExt + Unpin),
        response: &McpResponse,
    ) -> Result<()> {
        let raw = serde_json::to_string(response)?;
        writer
            .write_all(raw.as_bytes())
            .await
            .map_err(|e| BookrError::Transport(format!("Failed to write stdout: {}", e)))?;
        writer
            .write_all(b"\n")
            .await
            .map_err(|e| BookrError::Transport(format!("Failed to write stdout: {}", e)))?;
        writer
            .flush()
            .await
            .map_err(|e| BookrError::Transport(format!("Failed to flush stdout: {}", e)))?;
        Ok(())
    }

    /// Dispatch one request; notifications yield no response
    pub async fn handle(&self, request: McpRequest) -> Option<McpResponse> {
        let Some(id) = request.id else {
            log::debug!("notification: {}", request.method);
            return None;
        };

        log::debug!("request {}: {}", id, request.method);

        let response = match request.method.as_str() {
            "initialize" => McpResponse::success(id, self.initialize_result()),
            "ping" => McpResponse::success(id, json!({})),
            "tools/list" => McpResponse::success(id, self.list_tools_result()),
            "tools/call" => self.call_tool(id, &request.params).await,
            method => McpResponse::error(id, RpcError::method_not_found(method)),
        };

        Some(response)
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.name,
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    fn list_tools_result(&self) -> Value {
        let tools: Vec<Value> = self
            .registry
            .definitions()
            .iter()
            .map(|d| d.to_mcp_schema())
            .collect();
        json!({ "tools": tools })
    }

    async fn call_tool(&self, id: Value, params: &Value) -> McpResponse {
        let Some(name) = params["name"].as_str() else {
            return McpResponse::error(id, RpcError::invalid_params("missing tool name"));
        };

        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| json!({}));

        let result = self.registry.execute(name, arguments).await;

        McpResponse::success(
            id,
            json!({
                "content": [{ "type": "text", "text": result.content }],
                "isError": result.is_error
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BookPayload, CatalogClient, MockCatalogClient};
    use std::sync::Arc;

    fn server_with_mock() -> (Arc<MockCatalogClient>, McpServer) {
        let client = Arc::new(MockCatalogClient::new());
        let registry = ToolRegistry::standard(client.clone());
        (client, McpServer::new("bookr", registry))
    }

    #[tokio::test]
    async fn test_initialize() {
        let (_, server) = server_with_mock();

        let response = server
            .handle(McpRequest::new(1, "initialize", json!({})))
            .await
            .unwrap();

        assert!(response.is_success());
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "bookr");
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_ping() {
        let (_, server) = server_with_mock();

        let response = server.handle(McpRequest::new(2, "ping", json!({}))).await.unwrap();

        assert!(response.is_success());
        assert_eq!(response.result.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let (_, server) = server_with_mock();

        let response = server
            .handle(McpRequest::notification("notifications/initialized", json!({})))
            .await;

        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_tools_list() {
        let (_, server) = server_with_mock();

        let response = server
            .handle(McpRequest::new(3, "tools/list", json!({})))
            .await
            .unwrap();

        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        assert_eq!(tools.len(), 5);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
        assert!(tools.iter().any(|t| t["name"] == "list-books"));
    }

    #[tokio::test]
    async fn test_tools_call_list_books() {
        let (client, server) = server_with_mock();
        client
            .add_book(BookPayload {
                name: Some("Buku A".into()),
                publisher: Some("Dicoding Indonesia".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let response = server
            .handle(McpRequest::new(
                4,
                "tools/call",
                json!({"name": "list-books", "arguments": {}}),
            ))
            .await
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["type"], "text");
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Books: "));
        assert!(text.contains("Buku A"));
    }

    #[tokio::test]
    async fn test_tools_call_without_arguments_key() {
        let (_, server) = server_with_mock();

        let response = server
            .handle(McpRequest::new(5, "tools/call", json!({"name": "list-books"})))
            .await
            .unwrap();

        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_tools_call_missing_name_is_invalid_params() {
        let (_, server) = server_with_mock();

        let response = server
            .handle(McpRequest::new(6, "tools/call", json!({"arguments": {}})))
            .await
            .unwrap();

        assert!(!response.is_success());
        assert_eq!(response.error.unwrap().code, crate::server::ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tools_call_invocation_error_is_tool_level() {
        let (_, server) = server_with_mock();

        // A missing required argument is a tool-level error: the JSON-RPC
        // call itself succeeds, the result carries isError
        let response = server
            .handle(McpRequest::new(
                7,
                "tools/call",
                json!({"name": "add-book", "arguments": {"name": "Buku A"}}),
            ))
            .await
            .unwrap();

        assert!(response.is_success());
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("year"));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let (_, server) = server_with_mock();

        let response = server
            .handle(McpRequest::new(8, "resources/list", json!({})))
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, crate::server::ErrorCode::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_string_id_echoed_back() {
        let (_, server) = server_with_mock();

        let response = server
            .handle(McpRequest::new("req-9", "ping", json!({})))
            .await
            .unwrap();

        assert_eq!(response.id, json!("req-9"));
    }
}
