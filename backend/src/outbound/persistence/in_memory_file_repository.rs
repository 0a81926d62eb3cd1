//! In-memory file record repository backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::FileRecord;
use crate::domain::ports::{FileRepository, FileRepositoryError};

/// Process-local file store.
#[derive(Debug, Default)]
pub struct InMemoryFileRepository {
    records: DashMap<Uuid, FileRecord>,
}

impl InMemoryFileRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileRepository for InMemoryFileRepository {
    async fn store(&self, mut record: FileRecord) -> Result<FileRecord, FileRepositoryError> {
        let id = Uuid::new_v4();
        record.id = Some(id.to_string());
        self.records.insert(id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<FileRecord, FileRepositoryError> {
        self.records
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| FileRepositoryError::not_found(id))
    }

    async fn delete(&self, id: Uuid) -> Result<FileRecord, FileRepositoryError> {
        self.records
            .remove(&id)
            .map(|(_, record)| record)
            .ok_or_else(|| FileRepositoryError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryFileRepository {
        InMemoryFileRepository::new()
    }

    fn upload() -> FileRecord {
        FileRecord {
            id: Some("client-chosen".to_owned()),
            name: Some("notes.txt".to_owned()),
            owner: Some("Jane Doe".to_owned()),
            ..FileRecord::default()
        }
    }

    fn stored_id(record: &FileRecord) -> Uuid {
        record
            .id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok())
            .expect("stored record carries a UUID")
    }

    #[rstest]
    #[tokio::test]
    async fn store_assigns_uuid_and_keeps_fields(repo: InMemoryFileRepository) {
        let stored = repo.store(upload()).await.expect("store");

        let id = stored_id(&stored);
        assert_eq!(stored.name.as_deref(), Some("notes.txt"));
        assert_eq!(repo.get(id).await.expect("get"), stored);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_returns_the_removed_record(repo: InMemoryFileRepository) {
        let stored = repo.store(upload()).await.expect("store");
        let id = stored_id(&stored);

        assert_eq!(repo.delete(id).await.expect("delete"), stored);
        assert_eq!(repo.get(id).await, Err(FileRepositoryError::not_found(id)));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_of_missing_record_is_not_found(repo: InMemoryFileRepository) {
        let id = Uuid::new_v4();
        assert_eq!(repo.delete(id).await, Err(FileRepositoryError::not_found(id)));
    }
}
