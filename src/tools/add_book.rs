//! add-book tool - create a new catalog entry
//!
//! The add path does not expose reading progress: every new book is
//! created with `readPage = 0` and `reading = false`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Tool, ToolResult, args};
use crate::catalog::{BookPayload, CatalogClient};

/// Reading progress pinned on creation
const INITIAL_READ_PAGE: i32 = 0;
const INITIAL_READING: bool = false;

pub struct AddBookTool {
    client: Arc<dyn CatalogClient>,
}

impl AddBookTool {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for AddBookTool {
    fn name(&self) -> &'static str {
        "add-book"
    }

    fn description(&self) -> &'static str {
        "Add a new book to the collection"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The name of the book"
                },
                "year": {
                    "type": "integer",
                    "description": "The publication year"
                },
                "author": {
                    "type": "string",
                    "description": "The author of the book"
                },
                "summary": {
                    "type": "string",
                    "description": "A summary of the book"
                },
                "publisher": {
                    "type": "string",
                    "description": "The publisher of the book"
                },
                "pageCount": {
                    "type": "integer",
                    "description": "The number of pages"
                }
            },
            "required": ["name", "year"]
        })
    }

    async fn execute(&self, input: Value) -> Result<ToolResult, eyre::Error> {
        let name = args::require_str(&input, "name")?;
        let year = args::require_i32(&input, "year")?;
        let author = args::optional_str(&input, "author")?;
        let summary = args::optional_str(&input, "summary")?;
        let publisher = args::optional_str(&input, "publisher")?;
        let page_count = args::optional_i32(&input, "pageCount")?;

        let payload = BookPayload {
            name: Some(name),
            year: Some(year),
            author,
            summary,
            publisher,
            page_count,
            read_page: Some(INITIAL_READ_PAGE),
            reading: Some(INITIAL_READING),
        };

        match self.client.add_book(payload).await {
            Ok(book_id) => Ok(ToolResult::success(format!(
                "Book added successfully with ID: {}",
                book_id
            ))),
            Err(e) => {
                log::warn!("add-book failed: {}", e);
                Ok(ToolResult::success("Failed to add book"))
            }
        }
    }
}
