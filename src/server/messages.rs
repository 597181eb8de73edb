//! MCP message types for client ↔ server communication.
//!
//! JSON-RPC 2.0 over newline-delimited JSON. Request ids may be numbers or
//! strings and are echoed back untouched; requests without an id are
//! notifications and get no response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request received from an MCP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    /// Protocol marker, always "2.0".
    pub jsonrpc: String,
    /// Request ID for correlating responses; absent for notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Method name (e.g., "tools/list", "tools/call").
    pub method: String,
    /// Method parameters as JSON value.
    #[serde(default)]
    pub params: Value,
}

impl McpRequest {
    /// Create a new request with the given method and params.
    pub fn new(id: impl Into<Value>, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Some(id.into()),
            method: method.into(),
            params,
        }
    }

    /// Create a notification (no id, expects no response).
    pub fn notification(method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: method.into(),
            params,
        }
    }

    /// Check whether this request is a notification.
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Response sent back to the MCP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    /// Protocol marker, always "2.0".
    pub jsonrpc: String,
    /// Request ID this response corresponds to (null for parse errors).
    pub id: Value,
    /// Result value on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error details on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl McpResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }

    /// Check if this response indicates success.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Error details in a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    /// Error code.
    pub code: i32,
    /// Human-readable error message.
    pub message: String,
    /// Additional error data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    /// Create a new error.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Parse error (-32700).
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PARSE_ERROR, message)
    }

    /// Invalid request error (-32600).
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INVALID_REQUEST, message)
    }

    /// Method not found error (-32601).
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::METHOD_NOT_FOUND,
            format!("Unknown method: {}", method.into()),
        )
    }

    /// Invalid params error (-32602).
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INVALID_PARAMS, message)
    }

    /// Internal error (-32603).
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INTERNAL_ERROR, message)
    }
}

/// Standard error codes.
pub struct ErrorCode;

impl ErrorCode {
    /// Invalid JSON.
    pub const PARSE_ERROR: i32 = -32700;
    /// Invalid request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Unknown method.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid parameters.
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal server error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_parsing_numeric_id() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{}}"#;
        let request: McpRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.id, Some(json!(1)));
        assert_eq!(request.method, "tools/list");
        assert!(!request.is_notification());
    }

    #[test]
    fn test_request_parsing_string_id() {
        let raw = r#"{"jsonrpc":"2.0","id":"req-7","method":"ping"}"#;
        let request: McpRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.id, Some(json!("req-7")));
        // Absent params default to null
        assert!(request.params.is_null());
    }

    #[test]
    fn test_notification_has_no_id() {
        let raw = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        let request: McpRequest = serde_json::from_str(raw).unwrap();
        assert!(request.is_notification());
    }

    #[test]
    fn test_response_success_serialization() {
        let response = McpResponse::success(json!(1), json!({"tools": []}));
        let raw = serde_json::to_string(&response).unwrap();

        assert!(raw.contains("\"jsonrpc\":\"2.0\""));
        assert!(raw.contains("\"result\""));
        // The error key is omitted entirely, not serialized as null
        assert!(!raw.contains("\"error\""));
        assert!(response.is_success());
    }

    #[test]
    fn test_response_error_serialization() {
        let response = McpResponse::error(json!(2), RpcError::method_not_found("tools/eat"));
        let raw = serde_json::to_string(&response).unwrap();

        assert!(raw.contains("-32601"));
        assert!(raw.contains("Unknown method: tools/eat"));
        assert!(!raw.contains("\"result\""));
        assert!(!response.is_success());
    }

    #[test]
    fn test_error_helpers() {
        assert_eq!(RpcError::parse_error("bad").code, ErrorCode::PARSE_ERROR);
        assert_eq!(RpcError::invalid_request("bad").code, ErrorCode::INVALID_REQUEST);
        assert_eq!(RpcError::invalid_params("bad").code, ErrorCode::INVALID_PARAMS);
        assert_eq!(RpcError::internal_error("bad").code, ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn test_request_roundtrip() {
        let request = McpRequest::new(42, "tools/call", json!({"name": "list-books"}));
        let raw = serde_json::to_string(&request).unwrap();
        let parsed: McpRequest = serde_json::from_str(&raw).unwrap();

        assert_eq!(parsed.id, Some(json!(42)));
        assert_eq!(parsed.method, "tools/call");
        assert_eq!(parsed.params["name"], "list-books");
    }
}
