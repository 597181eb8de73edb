//! delete-book tool - remove an entry from the catalog

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Tool, ToolResult, args};
use crate::catalog::CatalogClient;

pub struct DeleteBookTool {
    client: Arc<dyn CatalogClient>,
}

impl DeleteBookTool {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for DeleteBookTool {
    fn name(&self) -> &'static str {
        "delete-book"
    }

    fn description(&self) -> &'static str {
        "Delete a book from the collection"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "bookId": {
                    "type": "string",
                    "description": "The ID of the book to delete"
                }
            },
            "required": ["bookId"]
        })
    }

    async fn execute(&self, input: Value) -> Result<ToolResult, eyre::Error> {
        let book_id = args::require_str(&input, "bookId")?;

        match self.client.delete_book(&book_id).await {
            Ok(()) => Ok(ToolResult::success("Book deleted successfully")),
            Err(e) => {
                log::warn!("delete-book {} failed: {}", book_id, e);
                Ok(ToolResult::success("Failed to delete book"))
            }
        }
    }
}
