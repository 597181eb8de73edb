//! list-books tool - all catalog entries on a single line

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Tool, ToolResult};
use crate::catalog::CatalogClient;

pub struct ListBooksTool {
    client: Arc<dyn CatalogClient>,
}

impl ListBooksTool {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for ListBooksTool {
    fn name(&self) -> &'static str {
        "list-books"
    }

    fn description(&self) -> &'static str {
        "Returns all books with their names"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _input: Value) -> Result<ToolResult, eyre::Error> {
        // A failed listing renders the same as an empty catalog; the cause
        // only goes to the log
        let books = match self.client.list_books().await {
            Ok(books) => books,
            Err(e) => {
                log::warn!("list-books failed: {}", e);
                Vec::new()
            }
        };

        let rendered = books
            .iter()
            .map(|b| format!("{:?}", b))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(ToolResult::success(format!("Books: {}", rendered)))
    }
}
