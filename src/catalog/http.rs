//! HTTP implementation of the catalog client
//!
//! Talks to the bookshelf REST API: GET/POST /books, GET/PUT/DELETE
//! /books/{id}. Every response is an `{status, message?, data?}` envelope;
//! only `status == "success"` counts as success, and a non-2xx HTTP status
//! short-circuits to failure before the body is consulted.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::catalog::client::{CatalogClient, CatalogError};
use crate::catalog::types::{
    BookDetail, BookDetailData, BookListData, BookPayload, BookSummary, Envelope, NewBookData,
};

/// Default catalog endpoint
const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Explicit per-request bound; the transport default is not relied on
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the HTTP catalog client
#[derive(Debug, Clone)]
pub struct HttpCatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for HttpCatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpCatalogConfig {
    /// Create a config pointing at a specific base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Catalog client over reqwest
#[derive(Debug)]
pub struct HttpCatalogClient {
    client: Client,
    config: HttpCatalogConfig,
}

impl HttpCatalogClient {
    /// Create a new client with the given config
    pub fn new(config: HttpCatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: HttpCatalogConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Read a response into an envelope, short-circuiting on non-2xx.
    ///
    /// On a non-2xx status the body is only mined for the envelope
    /// `message`; its `data` is never trusted.
    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, CatalogError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Envelope<Value>>(&body)
                .ok()
                .and_then(|e| e.message);
            return Err(classify_status(status, message));
        }

        response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| CatalogError::Transport(format!("Failed to decode response: {}", e)))
    }

    /// Reject envelopes whose own status field signals failure
    fn ensure_success<T>(envelope: &Envelope<T>) -> Result<(), CatalogError> {
        if envelope.status == "success" {
            Ok(())
        } else {
            Err(CatalogError::Unknown(
                envelope
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("status {}", envelope.status)),
            ))
        }
    }
}

/// Map a non-2xx HTTP status to a failure reason
fn classify_status(status: StatusCode, message: Option<String>) -> CatalogError {
    let detail = message.unwrap_or_else(|| status.to_string());
    if status == StatusCode::NOT_FOUND {
        CatalogError::NotFound
    } else if status.is_client_error() {
        CatalogError::Validation(detail)
    } else {
        CatalogError::Unknown(detail)
    }
}

fn transport(e: reqwest::Error) -> CatalogError {
    CatalogError::Transport(e.to_string())
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn list_books(&self) -> Result<Vec<BookSummary>, CatalogError> {
        let response = self
            .client
            .get(self.url("/books"))
            .send()
            .await
            .map_err(transport)?;

        let envelope = Self::read_envelope::<BookListData>(response).await?;
        Self::ensure_success(&envelope)?;

        let data = envelope
            .data
            .ok_or_else(|| CatalogError::Unknown("listing without data".to_string()))?;
        Ok(data.books)
    }

    async fn get_book_detail(&self, book_id: &str) -> Result<BookDetail, CatalogError> {
        let response = self
            .client
            .get(self.url(&format!("/books/{}", book_id)))
            .send()
            .await
            .map_err(transport)?;

        let envelope = Self::read_envelope::<BookDetailData>(response).await?;
        Self::ensure_success(&envelope)?;

        let data = envelope
            .data
            .ok_or_else(|| CatalogError::Unknown("detail without data".to_string()))?;
        Ok(data.book)
    }

    async fn add_book(&self, book: BookPayload) -> Result<String, CatalogError> {
        let response = self
            .client
            .post(self.url("/books"))
            .json(&book)
            .send()
            .await
            .map_err(transport)?;

        let envelope = Self::read_envelope::<NewBookData>(response).await?;
        Self::ensure_success(&envelope)?;

        let data = envelope
            .data
            .ok_or_else(|| CatalogError::Unknown("creation without bookId".to_string()))?;
        Ok(data.book_id)
    }

    async fn update_book(&self, book_id: &str, changes: BookPayload) -> Result<(), CatalogError> {
        let response = self
            .client
            .put(self.url(&format!("/books/{}", book_id)))
            .json(&changes)
            .send()
            .await
            .map_err(transport)?;

        let envelope = Self::read_envelope::<Value>(response).await?;
        Self::ensure_success(&envelope)
    }

    async fn delete_book(&self, book_id: &str) -> Result<(), CatalogError> {
        let response = self
            .client
            .delete(self.url(&format!("/books/{}", book_id)))
            .send()
            .await
            .map_err(transport)?;

        let envelope = Self::read_envelope::<Value>(response).await?;
        Self::ensure_success(&envelope)
    }
}
