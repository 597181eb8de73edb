//! Wire types for the catalog REST API
//!
//! The remote service speaks camelCase JSON and wraps every response in a
//! `{status, message?, data?}` envelope.

use serde::{Deserialize, Serialize};

/// One entry in the catalog listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

/// Full record for a single book
///
/// `finished` is derived by the catalog service from
/// `read_page == page_count`; it is never computed or sent from this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetail {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    #[serde(rename = "pageCount")]
    pub page_count: i32,
    #[serde(rename = "readPage")]
    pub read_page: i32,
    pub finished: bool,
    pub reading: bool,
    #[serde(rename = "insertedAt")]
    pub inserted_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// JSON body for POST /books and PUT /books/{id}
///
/// Absent fields are omitted from the encoded body, not sent as null, so
/// the service's partial-update semantics are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(rename = "pageCount", skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i32>,
    #[serde(rename = "readPage", skip_serializing_if = "Option::is_none")]
    pub read_page: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<bool>,
}

/// Response wrapper used by the catalog service on every endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// `data` payload of GET /books
#[derive(Debug, Clone, Deserialize)]
pub struct BookListData {
    pub books: Vec<BookSummary>,
}

/// `data` payload of GET /books/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct BookDetailData {
    pub book: BookDetail,
}

/// `data` payload of POST /books
#[derive(Debug, Clone, Deserialize)]
pub struct NewBookData {
    #[serde(rename = "bookId")]
    pub book_id: String,
}
