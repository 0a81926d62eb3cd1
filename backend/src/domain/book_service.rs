//! Catalogue use cases.
//!
//! [`BookService`] implements the [`BookInteractor`] driving port on top of
//! any [`BookRepository`]. It is the only place where repository absence is
//! reclassified into the domain "not found" condition.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{BookInteractor, BookRepository, BookRepositoryError};
use crate::domain::{Book, BookId, DEFAULT_LANGUAGE_TAG, Error, Resource};

/// Book interactor backed by a repository.
pub struct BookService<R> {
    repository: Arc<R>,
}

impl<R> Clone for BookService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> BookService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn parse_id(raw: &str) -> Result<BookId, Error> {
    BookId::parse(raw).map_err(|_| Error::invalid_identifier(Resource::Book))
}

fn map_absence(error: BookRepositoryError) -> Error {
    match error {
        BookRepositoryError::NotFound { .. } => Error::not_found(Resource::Book),
        other => Error::from(other),
    }
}

#[async_trait]
impl<R> BookInteractor for BookService<R>
where
    R: BookRepository,
{
    async fn create_book(&self, book: Book) -> Result<Book, Error> {
        let book = book.with_language_tag(DEFAULT_LANGUAGE_TAG);
        Ok(self.repository.create(book).await?)
    }

    async fn get_book(&self, id: &str) -> Result<Book, Error> {
        let id = parse_id(id)?;
        self.repository.read_by_id(id).await.map_err(map_absence)
    }

    async fn list_books(&self) -> Result<Vec<Book>, Error> {
        Ok(self.repository.read_all().await?)
    }

    async fn update_book(&self, book: Book) -> Result<(), Error> {
        self.repository.update(&book).await.map_err(map_absence)
    }

    async fn delete_book(&self, id: &str) -> Result<(), Error> {
        let id = parse_id(id)?;
        match self.repository.delete(id).await {
            Ok(()) | Err(BookRepositoryError::NotFound { .. }) => Ok(()),
            Err(other) => Err(other.into()),
        }
    }
}
