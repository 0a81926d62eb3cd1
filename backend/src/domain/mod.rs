//! Domain primitives, use cases and ports.
//!
//! Public surface:
//! - [`Book`] and [`BookId`]: the catalogue entity.
//! - [`FileRecord`]: the stored file entity.
//! - [`DomainError`] and [`Error`]: named failure conditions and the
//!   use-case error that wraps them alongside repository failures.
//! - [`BookService`] and [`FileService`]: interactors implementing the
//!   driving ports in [`ports`].
//! - [`LanguageTag`]: locale parsing and title casing for presentation.

pub mod book;
pub mod book_service;
pub mod error;
pub mod file;
pub mod file_service;
pub mod localization;
pub mod ports;

pub use self::book::{Book, BookId};
pub use self::book_service::BookService;
pub use self::error::{AsDomainError, DomainError, Error, Resource};
pub use self::file::FileRecord;
pub use self::file_service::FileService;
pub use self::localization::{DEFAULT_LANGUAGE_TAG, LanguageTag, LanguageTagError};
