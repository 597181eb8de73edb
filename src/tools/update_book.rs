//! update-book tool - partial update of an existing entry
//!
//! Only the arguments the caller supplies are forwarded; everything else
//! stays absent so the catalog keeps its stored values.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Tool, ToolResult, args};
use crate::catalog::{BookPayload, CatalogClient};

pub struct UpdateBookTool {
    client: Arc<dyn CatalogClient>,
}

impl UpdateBookTool {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for UpdateBookTool {
    fn name(&self) -> &'static str {
        "update-book"
    }

    fn description(&self) -> &'static str {
        "Update an existing book"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "bookId": {
                    "type": "string",
                    "description": "The ID of the book to update"
                },
                "name": {
                    "type": "string",
                    "description": "The new name of the book"
                },
                "year": {
                    "type": "integer",
                    "description": "The new publication year"
                },
                "author": {
                    "type": "string",
                    "description": "The new author of the book"
                },
                "summary": {
                    "type": "string",
                    "description": "The new summary of the book"
                },
                "publisher": {
                    "type": "string",
                    "description": "The new publisher of the book"
                },
                "pageCount": {
                    "type": "integer",
                    "description": "The new number of pages"
                },
                "readPage": {
                    "type": "integer",
                    "description": "Number of pages read"
                },
                "reading": {
                    "type": "boolean",
                    "description": "Whether currently reading this book"
                }
            },
            "required": ["bookId"]
        })
    }

    async fn execute(&self, input: Value) -> Result<ToolResult, eyre::Error> {
        let book_id = args::require_str(&input, "bookId")?;

        let changes = BookPayload {
            name: args::optional_str(&input, "name")?,
            year: args::optional_i32(&input, "year")?,
            author: args::optional_str(&input, "author")?,
            summary: args::optional_str(&input, "summary")?,
            publisher: args::optional_str(&input, "publisher")?,
            page_count: args::optional_i32(&input, "pageCount")?,
            read_page: args::optional_i32(&input, "readPage")?,
            reading: args::optional_bool(&input, "reading")?,
        };

        match self.client.update_book(&book_id, changes).await {
            Ok(()) => Ok(ToolResult::success("Book updated successfully")),
            Err(e) => {
                log::warn!("update-book {} failed: {}", book_id, e);
                Ok(ToolResult::success("Failed to update book"))
            }
        }
    }
}
