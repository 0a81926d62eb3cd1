//! Driven port for book persistence.
//!
//! Adapters hold the catalogue; interactors never see storage details. The
//! only failure an interactor inspects is [`BookRepositoryError::NotFound`],
//! which it turns into the domain-level "book not found" condition.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Book, BookId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by book repository adapters.
    pub enum BookRepositoryError {
        /// No book is stored under the identifier.
        NotFound { id: Uuid } => "book {id} not found",
        /// The backing store failed.
        Store { message: String } => "book store failure: {message}",
    }
}

/// Port for book storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Store a new book, assigning it a fresh identifier.
    ///
    /// Any identifier already carried by `book` is ignored.
    async fn create(&self, book: Book) -> Result<Book, BookRepositoryError>;

    /// Fetch a single book.
    async fn read_by_id(&self, id: BookId) -> Result<Book, BookRepositoryError>;

    /// Fetch every stored book in no particular order.
    async fn read_all(&self) -> Result<Vec<Book>, BookRepositoryError>;

    /// Apply a price change to an existing book.
    ///
    /// Only `price` is taken from `book`; the other stored fields are kept.
    async fn update(&self, book: &Book) -> Result<(), BookRepositoryError>;

    /// Remove a book.
    async fn delete(&self, id: BookId) -> Result<(), BookRepositoryError>;
}
