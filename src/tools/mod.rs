//! Tool system for MCP clients
//!
//! Each tool adapts one catalog operation: it declares an input schema,
//! extracts and converts the invocation arguments, makes a single remote
//! call, and renders the outcome as text. Tools hold a shared
//! `Arc<dyn CatalogClient>` and no other state.

mod add_book;
mod args;
mod delete_book;
mod get_detail_book;
mod list_books;
mod registry;
mod update_book;

pub use args::ArgError;
pub use registry::ToolRegistry;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// A tool that can be called over the MCP transport
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (matches the tools/call name)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> Value;

    /// Execute the tool
    async fn execute(&self, input: Value) -> Result<ToolResult, eyre::Error>;
}

/// Result from tool execution
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub content: String,
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}

/// Tool definition for the tools/list response
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Convert to the MCP tool listing schema format
    pub fn to_mcp_schema(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema,
        })
    }
}

// Re-export individual tools for direct access if needed
pub use add_book::AddBookTool;
pub use delete_book::DeleteBookTool;
pub use get_detail_book::GetDetailBookTool;
pub use list_books::ListBooksTool;
pub use update_book::UpdateBookTool;
