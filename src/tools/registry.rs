//! Tool registry - manages tool registration and dispatch
//!
//! The registry is the outermost dispatch boundary: unknown tools and
//! every error raised during execution are rendered as error-shaped text
//! results and never propagate to the transport.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::{
    AddBookTool, DeleteBookTool, GetDetailBookTool, ListBooksTool, Tool, ToolDefinition,
    ToolResult, UpdateBookTool,
};
use crate::catalog::CatalogClient;

/// Manages tool dispatch for the MCP server
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a registry with the five catalog tools
    pub fn standard(client: Arc<dyn CatalogClient>) -> Self {
        let mut registry = Self::new();

        registry.add_tool(Box::new(ListBooksTool::new(Arc::clone(&client))));
        registry.add_tool(Box::new(GetDetailBookTool::new(Arc::clone(&client))));
        registry.add_tool(Box::new(AddBookTool::new(Arc::clone(&client))));
        registry.add_tool(Box::new(UpdateBookTool::new(Arc::clone(&client))));
        registry.add_tool(Box::new(DeleteBookTool::new(client)));

        registry
    }

    /// Create an empty registry (for custom tool sets)
    pub fn new() -> Self {
        Self { tools: HashMap::new() }
    }

    /// Add a tool to the registry
    pub fn add_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get tool definitions for the tools/list response
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.input_schema(),
            })
            .collect()
    }

    /// Execute a tool invocation
    pub async fn execute(&self, name: &str, input: Value) -> ToolResult {
        match self.tools.get(name) {
            Some(tool) => match tool.execute(input).await {
                Ok(result) => result,
                Err(e) => ToolResult::error(format!("Error executing {}: {}", name, e)),
            },
            None => ToolResult::error(format!("Unknown tool: {}", name)),
        }
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the list of tool names
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalogClient;

    fn standard_registry() -> (Arc<MockCatalogClient>, ToolRegistry) {
        let client = Arc::new(MockCatalogClient::new());
        let registry = ToolRegistry::standard(client.clone());
        (client, registry)
    }

    #[test]
    fn test_standard_registry_has_all_tools() {
        let (_, registry) = standard_registry();

        assert!(registry.has_tool("list-books"));
        assert!(registry.has_tool("get-detail-book"));
        assert!(registry.has_tool("add-book"));
        assert!(registry.has_tool("update-book"));
        assert!(registry.has_tool("delete-book"));
        assert_eq!(registry.tool_names().len(), 5);
    }

    #[test]
    fn test_definitions() {
        let (_, registry) = standard_registry();
        let defs = registry.definitions();

        assert_eq!(defs.len(), 5);
        assert!(defs.iter().any(|d| d.name == "add-book"));

        let add = defs.iter().find(|d| d.name == "add-book").unwrap();
        let required = add.input_schema["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("name")));
        assert!(required.contains(&serde_json::json!("year")));
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let (_, registry) = standard_registry();

        let result = registry.execute("rate-book", serde_json::json!({})).await;

        assert!(result.is_error);
        assert!(result.content.contains("Unknown tool: rate-book"));
    }

    #[tokio::test]
    async fn test_execute_invocation_error_is_caught() {
        let (client, registry) = standard_registry();

        let result = registry
            .execute("add-book", serde_json::json!({"name": "Buku A"}))
            .await;

        assert!(result.is_error);
        assert!(result.content.contains("missing required argument: year"));
        // The failed invocation never reached the client
        assert_eq!(client.total_calls().await, 0);
    }

    #[tokio::test]
    async fn test_execute_happy_path() {
        let (_, registry) = standard_registry();

        let result = registry
            .execute("add-book", serde_json::json!({"name": "Buku A", "year": 2010}))
            .await;

        assert!(!result.is_error);
        assert!(result.content.starts_with("Book added successfully with ID: "));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.tool_names().is_empty());
        assert!(registry.definitions().is_empty());
    }
}
