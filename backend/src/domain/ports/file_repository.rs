//! Driven port for file record persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::FileRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by file repository adapters.
    pub enum FileRepositoryError {
        /// No record is stored under the identifier.
        NotFound { id: Uuid } => "file {id} not found",
        /// The backing store failed.
        Store { message: String } => "file store failure: {message}",
    }
}

/// Port for file record storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// Store a record under a freshly assigned identifier and return it.
    async fn store(&self, record: FileRecord) -> Result<FileRecord, FileRepositoryError>;

    /// Fetch a stored record.
    async fn get(&self, id: Uuid) -> Result<FileRecord, FileRepositoryError>;

    /// Remove a stored record and return it.
    async fn delete(&self, id: Uuid) -> Result<FileRecord, FileRepositoryError>;
}
