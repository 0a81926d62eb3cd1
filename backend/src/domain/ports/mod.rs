//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`BookInteractor`], [`FileInteractor`]) are what inbound
//! adapters call. Driven ports ([`BookRepository`], [`FileRepository`]) are
//! what outbound adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod book_interactor;
mod book_repository;
mod file_interactor;
mod file_repository;

#[cfg(test)]
pub use book_interactor::MockBookInteractor;
pub use book_interactor::BookInteractor;
#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BookRepository, BookRepositoryError};
#[cfg(test)]
pub use file_interactor::MockFileInteractor;
pub use file_interactor::FileInteractor;
#[cfg(test)]
pub use file_repository::MockFileRepository;
pub use file_repository::{FileRepository, FileRepositoryError};
