//! Driving port for catalogue use cases.
//!
//! HTTP handlers depend on this port only. Identifiers arrive as raw text
//! from the request path; parsing them is the interactor's job so that a
//! malformed id surfaces as the "invalid book id" domain condition.

use async_trait::async_trait;

use crate::domain::{Book, Error};

/// Catalogue use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookInteractor: Send + Sync {
    /// Store a new book with the default language tag.
    async fn create_book(&self, book: Book) -> Result<Book, Error>;

    /// Fetch a book by its textual identifier.
    async fn get_book(&self, id: &str) -> Result<Book, Error>;

    /// Fetch every book.
    async fn list_books(&self) -> Result<Vec<Book>, Error>;

    /// Reprice an existing book.
    async fn update_book(&self, book: Book) -> Result<(), Error>;

    /// Remove a book. Removing an absent book succeeds.
    async fn delete_book(&self, id: &str) -> Result<(), Error>;
}
