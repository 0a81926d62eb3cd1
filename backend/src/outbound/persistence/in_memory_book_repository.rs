//! In-memory book repository backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::ports::{BookRepository, BookRepositoryError};
use crate::domain::{Book, BookId};

/// Process-local catalogue.
///
/// Per-key operations are atomic; nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: DashMap<Uuid, Book>,
}

impl InMemoryBookRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookRepositoryError> {
        let id = BookId::random();
        let book = book.with_id(id);
        self.books.insert(*id.as_uuid(), book.clone());
        Ok(book)
    }

    async fn read_by_id(&self, id: BookId) -> Result<Book, BookRepositoryError> {
        self.books
            .get(id.as_uuid())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| BookRepositoryError::not_found(id))
    }

    async fn read_all(&self) -> Result<Vec<Book>, BookRepositoryError> {
        Ok(self
            .books
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn update(&self, book: &Book) -> Result<(), BookRepositoryError> {
        let mut stored = self
            .books
            .get_mut(book.id.as_uuid())
            .ok_or_else(|| BookRepositoryError::not_found(book.id))?;
        stored.price = book.price;
        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<(), BookRepositoryError> {
        self.books
            .remove(id.as_uuid())
            .map(|_| ())
            .ok_or_else(|| BookRepositoryError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryBookRepository {
        InMemoryBookRepository::new()
    }

    fn draft() -> Book {
        Book::draft("a book", "someone", 42).with_language_tag("en")
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_fresh_identifiers(repo: InMemoryBookRepository) {
        let first = repo.create(draft()).await.expect("create");
        let second = repo.create(draft()).await.expect("create");

        assert!(first.id.is_persisted());
        assert_ne!(first.id, second.id);
        assert_eq!(repo.read_all().await.expect("list").len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn create_ignores_client_identifier(repo: InMemoryBookRepository) {
        let supplied = BookId::random();
        let created = repo.create(draft().with_id(supplied)).await.expect("create");
        assert_ne!(created.id, supplied);
    }

    #[rstest]
    #[tokio::test]
    async fn read_returns_stored_book(repo: InMemoryBookRepository) {
        let created = repo.create(draft()).await.expect("create");
        let read = repo.read_by_id(created.id).await.expect("read");
        assert_eq!(read, created);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_keys_report_not_found(repo: InMemoryBookRepository) {
        let id = BookId::random();
        let expected = BookRepositoryError::not_found(id);

        assert_eq!(repo.read_by_id(id).await, Err(expected.clone()));
        assert_eq!(
            repo.update(&Book::price_change(id, 5)).await,
            Err(expected.clone())
        );
        assert_eq!(repo.delete(id).await, Err(expected));
    }

    #[rstest]
    #[tokio::test]
    async fn update_changes_only_the_price(repo: InMemoryBookRepository) {
        let created = repo.create(draft()).await.expect("create");

        repo.update(&Book::price_change(created.id, 7))
            .await
            .expect("update");

        let read = repo.read_by_id(created.id).await.expect("read");
        assert_eq!(read.price, 7);
        assert_eq!(read.title, "a book");
        assert_eq!(read.author, "someone");
        assert_eq!(read.language_tag, "en");
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_the_book(repo: InMemoryBookRepository) {
        let created = repo.create(draft()).await.expect("create");

        repo.delete(created.id).await.expect("delete");

        assert!(repo.read_all().await.expect("list").is_empty());
        assert_eq!(
            repo.delete(created.id).await,
            Err(BookRepositoryError::not_found(created.id))
        );
    }
}
