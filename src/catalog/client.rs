//! CatalogClient trait and test double
//!
//! The trait is the seam between the tool layer and the HTTP transport:
//! tools hold an `Arc<dyn CatalogClient>` and never see reqwest types.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::catalog::types::{BookDetail, BookPayload, BookSummary};

/// Failure reason for a catalog call.
///
/// The dispatcher collapses these to the fixed failure texts of the tool
/// contract; the typed reason exists so the cause can be logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("book not found")]
    NotFound,

    #[error("catalog rejected the request: {0}")]
    Validation(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected catalog response: {0}")]
    Unknown(String),
}

/// Stateless catalog client - each call is an independent remote operation
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// All books, in the order the catalog returns them
    async fn list_books(&self) -> Result<Vec<BookSummary>, CatalogError>;

    /// Full record for one book
    async fn get_book_detail(&self, book_id: &str) -> Result<BookDetail, CatalogError>;

    /// Create a book, returning the new bookId
    async fn add_book(&self, book: BookPayload) -> Result<String, CatalogError>;

    /// Update only the supplied fields of an existing book
    async fn update_book(&self, book_id: &str, changes: BookPayload) -> Result<(), CatalogError>;

    /// Remove a book
    async fn delete_book(&self, book_id: &str) -> Result<(), CatalogError>;
}

const MOCK_INSERTED_AT: &str = "2021-03-05T06:14:28.930Z";
const MOCK_UPDATED_AT: &str = "2021-03-05T06:14:30.718Z";

#[derive(Default)]
struct MockState {
    books: Vec<BookDetail>,
    next_id: u64,
    fail_with: Option<CatalogError>,
    list_calls: usize,
    get_calls: usize,
    add_calls: usize,
    update_calls: usize,
    delete_calls: usize,
}

/// In-memory catalog for tests.
///
/// Mirrors the remote service's rules: sequential ids, server-side
/// `finished = read_page == page_count`, merge-only-supplied-fields on
/// update. Counts calls per operation so tests can assert that a failed
/// invocation never reached the client.
#[derive(Default)]
pub struct MockCatalogClient {
    state: Mutex<MockState>,
}

impl MockCatalogClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with the given error
    pub async fn fail_with(&self, err: CatalogError) {
        self.state.lock().await.fail_with = Some(err);
    }

    /// Restore normal operation after `fail_with`
    pub async fn recover(&self) {
        self.state.lock().await.fail_with = None;
    }

    pub async fn list_calls(&self) -> usize {
        self.state.lock().await.list_calls
    }

    pub async fn get_calls(&self) -> usize {
        self.state.lock().await.get_calls
    }

    pub async fn add_calls(&self) -> usize {
        self.state.lock().await.add_calls
    }

    pub async fn update_calls(&self) -> usize {
        self.state.lock().await.update_calls
    }

    pub async fn delete_calls(&self) -> usize {
        self.state.lock().await.delete_calls
    }

    /// Calls across all five operations
    pub async fn total_calls(&self) -> usize {
        let state = self.state.lock().await;
        state.list_calls + state.get_calls + state.add_calls + state.update_calls + state.delete_calls
    }
}

#[async_trait]
impl CatalogClient for MockCatalogClient {
    async fn list_books(&self) -> Result<Vec<BookSummary>, CatalogError> {
        let mut state = self.state.lock().await;
        state.list_calls += 1;
        if let Some(err) = &state.fail_with {
            return Err(err.clone());
        }

        Ok(state
            .books
            .iter()
            .map(|b| BookSummary {
                id: b.id.clone(),
                name: b.name.clone(),
                publisher: b.publisher.clone(),
            })
            .collect())
    }

    async fn get_book_detail(&self, book_id: &str) -> Result<BookDetail, CatalogError> {
        let mut state = self.state.lock().await;
        state.get_calls += 1;
        if let Some(err) = &state.fail_with {
            return Err(err.clone());
        }

        state
            .books
            .iter()
            .find(|b| b.id == book_id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn add_book(&self, book: BookPayload) -> Result<String, CatalogError> {
        let mut state = self.state.lock().await;
        state.add_calls += 1;
        if let Some(err) = &state.fail_with {
            return Err(err.clone());
        }

        let name = book
            .name
            .ok_or_else(|| CatalogError::Validation("Mohon isi nama buku".to_string()))?;

        let page_count = book.page_count.unwrap_or(0);
        let read_page = book.read_page.unwrap_or(0);
        if read_page > page_count {
            return Err(CatalogError::Validation(
                "readPage tidak boleh lebih besar dari pageCount".to_string(),
            ));
        }

        state.next_id += 1;
        let id = format!("book-{:04}", state.next_id);

        state.books.push(BookDetail {
            id: id.clone(),
            name,
            year: book.year.unwrap_or(0),
            author: book.author.unwrap_or_default(),
            summary: book.summary.unwrap_or_default(),
            publisher: book.publisher.unwrap_or_default(),
            page_count,
            read_page,
            finished: read_page == page_count,
            reading: book.reading.unwrap_or(false),
            inserted_at: MOCK_INSERTED_AT.to_string(),
            updated_at: MOCK_INSERTED_AT.to_string(),
        });

        Ok(id)
    }

    async fn update_book(&self, book_id: &str, changes: BookPayload) -> Result<(), CatalogError> {
        let mut state = self.state.lock().await;
        state.update_calls += 1;
        if let Some(err) = &state.fail_with {
            return Err(err.clone());
        }

        let book = state
            .books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or(CatalogError::NotFound)?;

        if let Some(name) = changes.name {
            book.name = name;
        }
        if let Some(year) = changes.year {
            book.year = year;
        }
        if let Some(author) = changes.author {
            book.author = author;
        }
        if let Some(summary) = changes.summary {
            book.summary = summary;
        }
        if let Some(publisher) = changes.publisher {
            book.publisher = publisher;
        }
        if let Some(page_count) = changes.page_count {
            book.page_count = page_count;
        }
        if let Some(read_page) = changes.read_page {
            book.read_page = read_page;
        }
        if let Some(reading) = changes.reading {
            book.reading = reading;
        }

        book.finished = book.read_page == book.page_count;
        book.updated_at = MOCK_UPDATED_AT.to_string();

        Ok(())
    }

    async fn delete_book(&self, book_id: &str) -> Result<(), CatalogError> {
        let mut state = self.state.lock().await;
        state.delete_calls += 1;
        if let Some(err) = &state.fail_with {
            return Err(err.clone());
        }

        let before = state.books.len();
        state.books.retain(|b| b.id != book_id);

        if state.books.len() == before {
            return Err(CatalogError::NotFound);
        }
        Ok(())
    }
}
