//! File record use cases.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{FileInteractor, FileRepository, FileRepositoryError};
use crate::domain::{Error, FileRecord, Resource};

/// File interactor backed by a repository and a clock.
pub struct FileService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> FileService<R> {
    /// Create a service over the given repository, stamping uploads with
    /// `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| Error::invalid_identifier(Resource::File))
}

#[async_trait]
impl<R> FileInteractor for FileService<R>
where
    R: FileRepository,
{
    async fn upload(&self, mut record: FileRecord) -> Result<FileRecord, Error> {
        record.created = Some(self.clock.utc());
        Ok(self.repository.store(record).await?)
    }

    async fn retrieve(&self, id: &str) -> Result<FileRecord, Error> {
        let id = parse_id(id)?;
        self.repository.get(id).await.map_err(|err| match err {
            FileRepositoryError::NotFound { .. } => Error::not_found(Resource::File),
            other => other.into(),
        })
    }

    async fn delete(&self, id: &str) -> Result<FileRecord, Error> {
        let uuid = parse_id(id)?;
        match self.repository.delete(uuid).await {
            Ok(removed) => Ok(removed),
            Err(FileRepositoryError::NotFound { .. }) => Ok(FileRecord::with_id(id)),
            Err(other) => Err(other.into()),
        }
    }
}

#[cfg(test)]
mod tests;
