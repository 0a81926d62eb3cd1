//! Shared validation rules for inbound HTTP adapters.

/// Validation failures for write commands.
///
/// Each variant's text is sent to clients verbatim with a 400 status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestValidationError {
    #[error("title is required")]
    TitleRequired,
    #[error("author is required")]
    AuthorRequired,
    #[error("price must be greater than zero")]
    PriceNotPositive,
    #[error("id is required")]
    IdRequired,
    #[error("invalid id")]
    InvalidId,
}

/// Require a non-empty identifier field.
pub(crate) fn required_id(id: Option<String>) -> Result<String, RequestValidationError> {
    id.filter(|value| !value.is_empty())
        .ok_or(RequestValidationError::IdRequired)
}
