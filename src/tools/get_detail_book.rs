//! get-detail-book tool - full record for one book

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Tool, ToolResult, args};
use crate::catalog::{CatalogClient, CatalogError};

pub struct GetDetailBookTool {
    client: Arc<dyn CatalogClient>,
}

impl GetDetailBookTool {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetDetailBookTool {
    fn name(&self) -> &'static str {
        "get-detail-book"
    }

    fn description(&self) -> &'static str {
        "Get detailed information about a specific book"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "bookId": {
                    "type": "string",
                    "description": "The ID of the book to get details for"
                }
            },
            "required": ["bookId"]
        })
    }

    async fn execute(&self, input: Value) -> Result<ToolResult, eyre::Error> {
        let book_id = args::require_str(&input, "bookId")?;

        match self.client.get_book_detail(&book_id).await {
            Ok(detail) => Ok(ToolResult::success(format!("Book Details: {:?}", detail))),
            Err(e) => {
                // Any failure collapses to the not-found message; the
                // requested id is echoed verbatim
                if !matches!(e, CatalogError::NotFound) {
                    log::warn!("get-detail-book {} failed: {}", book_id, e);
                }
                Ok(ToolResult::success(format!("Book not found with ID: {}", book_id)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BookPayload, MockCatalogClient};

    #[tokio::test]
    async fn test_get_detail_renders_all_fields() {
        let client = Arc::new(MockCatalogClient::new());
        let id = client
            .add_book(BookPayload {
                name: Some("Buku A".into()),
                year: Some(2010),
                author: Some("John Doe".into()),
                summary: Some("Lorem ipsum dolor sit amet".into()),
                publisher: Some("Dicoding Indonesia".into()),
                page_count: Some(100),
                read_page: Some(25),
                reading: Some(false),
            })
            .await
            .unwrap();

        let tool = GetDetailBookTool::new(client);
        let result = tool
            .execute(serde_json::json!({"bookId": id}))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert!(result.content.starts_with("Book Details: "));
        assert!(result.content.contains("Buku A"));
        assert!(result.content.contains("2010"));
        assert!(result.content.contains("John Doe"));
    }

    #[tokio::test]
    async fn test_get_detail_not_found_echoes_id() {
        let client = Arc::new(MockCatalogClient::new());
        let tool = GetDetailBookTool::new(client);

        let result = tool
            .execute(serde_json::json!({"bookId": "Uvh6KtHbsu_kP79K"}))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(result.content, "Book not found with ID: Uvh6KtHbsu_kP79K");
    }

    #[tokio::test]
    async fn test_get_detail_transport_failure_collapses_to_not_found() {
        let client = Arc::new(MockCatalogClient::new());
        client
            .fail_with(CatalogError::Transport("timed out".into()))
            .await;

        let tool = GetDetailBookTool::new(client);
        let result = tool
            .execute(serde_json::json!({"bookId": "b1"}))
            .await
            .unwrap();

        assert_eq!(result.content, "Book not found with ID: b1");
    }

    #[tokio::test]
    async fn test_get_detail_missing_book_id_is_invocation_error() {
        let client = Arc::new(MockCatalogClient::new());
        let tool = GetDetailBookTool::new(Arc::clone(&client) as Arc<dyn CatalogClient>);

        let result = tool.execute(serde_json::json!({})).await;

        assert!(result.is_err());
        // The remote client was never invoked
        assert_eq!(client.total_calls().await, 0);
    }
}
