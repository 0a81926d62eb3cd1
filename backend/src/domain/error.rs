//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses via the error presenter; nothing here knows about status codes.

use std::fmt;

use crate::domain::ports::{BookRepositoryError, FileRepositoryError};

/// Resource family a domain error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Catalogue item.
    Book,
    /// Stored file record.
    File,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book => f.write_str("book"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Named failure conditions raised by interactors.
///
/// The set is closed: interactors are the only producers, and they build
/// these from lower-layer signals so clients always see stable text.
///
/// # Examples
/// ```
/// use bookshop::domain::{DomainError, Resource};
///
/// assert_eq!(DomainError::NotFound(Resource::Book).to_string(), "book not found");
/// assert_eq!(
///     DomainError::InvalidIdentifier(Resource::Book).to_string(),
///     "invalid book id"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DomainError {
    /// The addressed resource does not exist.
    #[error("{0} not found")]
    NotFound(Resource),
    /// The supplied identifier is not a well-formed UUID.
    #[error("invalid {0} id")]
    InvalidIdentifier(Resource),
}

/// Failure returned by the use-case layer.
///
/// Repository failures other than absence pass through untouched so the
/// presenter can decide how much of them to reveal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Named domain condition.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Book store failure that is not an absence signal.
    #[error(transparent)]
    BookRepository(#[from] BookRepositoryError),
    /// File store failure that is not an absence signal.
    #[error(transparent)]
    FileRepository(#[from] FileRepositoryError),
}

impl Error {
    /// Shorthand for [`DomainError::NotFound`].
    pub fn not_found(resource: Resource) -> Self {
        Self::Domain(DomainError::NotFound(resource))
    }

    /// Shorthand for [`DomainError::InvalidIdentifier`].
    pub fn invalid_identifier(resource: Resource) -> Self {
        Self::Domain(DomainError::InvalidIdentifier(resource))
    }
}

/// Exposes the named domain condition carried by an error, if any.
///
/// The error presenter checks this before any status-based
/// classification.
pub trait AsDomainError: std::error::Error {
    /// Return the domain condition wrapped by this error.
    fn domain_error(&self) -> Option<DomainError> {
        None
    }
}

impl AsDomainError for DomainError {
    fn domain_error(&self) -> Option<DomainError> {
        Some(*self)
    }
}

impl AsDomainError for Error {
    fn domain_error(&self) -> Option<DomainError> {
        match self {
            Self::Domain(domain) => Some(*domain),
            Self::BookRepository(_) | Self::FileRepository(_) => None,
        }
    }
}

#[cfg(test)]
mod tests;
