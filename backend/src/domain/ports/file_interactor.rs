//! Driving port for file record use cases.

use async_trait::async_trait;

use crate::domain::{Error, FileRecord};

/// File record use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileInteractor: Send + Sync {
    /// Stamp the record with its creation time and store it.
    async fn upload(&self, record: FileRecord) -> Result<FileRecord, Error>;

    /// Fetch a record by its textual identifier.
    async fn retrieve(&self, id: &str) -> Result<FileRecord, Error>;

    /// Remove a record and return it. Removing an absent record succeeds.
    async fn delete(&self, id: &str) -> Result<FileRecord, Error>;
}
