//! Tests for domain error texts and classification.

use super::*;
use rstest::rstest;
use uuid::Uuid;

#[rstest]
#[case(DomainError::NotFound(Resource::Book), "book not found")]
#[case(DomainError::InvalidIdentifier(Resource::Book), "invalid book id")]
#[case(DomainError::NotFound(Resource::File), "file not found")]
#[case(DomainError::InvalidIdentifier(Resource::File), "invalid file id")]
fn domain_errors_have_fixed_texts(#[case] error: DomainError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[rstest]
fn wrapped_domain_errors_keep_their_text() {
    let err = Error::not_found(Resource::Book);
    assert_eq!(err.to_string(), "book not found");
    assert_eq!(
        err.domain_error(),
        Some(DomainError::NotFound(Resource::Book))
    );
}

#[rstest]
fn repository_errors_are_not_domain_errors() {
    let store = Error::from(BookRepositoryError::store("disk on fire"));
    assert_eq!(store.domain_error(), None);
    assert_eq!(store.to_string(), "book store failure: disk on fire");

    let files = Error::from(FileRepositoryError::not_found(Uuid::nil()));
    assert_eq!(files.domain_error(), None);
}

#[rstest]
fn invalid_identifier_shorthand_targets_resource() {
    assert_eq!(
        Error::invalid_identifier(Resource::File),
        Error::Domain(DomainError::InvalidIdentifier(Resource::File))
    );
}
