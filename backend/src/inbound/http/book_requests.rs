//! Write commands accepted by the book endpoints and their validation.
//!
//! Validation is fail-fast: the first broken rule is reported and the rest
//! are not checked. Missing JSON fields decode to empty values so they hit
//! the same rules as explicitly empty ones.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Book, BookId};
use crate::inbound::http::validation::RequestValidationError;

/// Body of `PUT /books`.
///
/// Example JSON: `{"title":"a book","author":"someone","price":42}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CreateBookRequest {
    #[serde(default)]
    #[schema(example = "a book")]
    pub title: String,
    #[serde(default)]
    #[schema(example = "someone")]
    pub author: String,
    #[serde(default)]
    #[schema(example = 42)]
    pub price: i64,
}

impl CreateBookRequest {
    /// Check title, author and price, in that order.
    ///
    /// # Examples
    /// ```
    /// use bookshop::inbound::http::book_requests::CreateBookRequest;
    /// use bookshop::inbound::http::validation::RequestValidationError;
    ///
    /// let request = CreateBookRequest {
    ///     title: "a book".to_owned(),
    ///     author: String::new(),
    ///     price: 0,
    /// };
    /// assert_eq!(request.validate(), Err(RequestValidationError::AuthorRequired));
    /// ```
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if self.title.is_empty() {
            return Err(RequestValidationError::TitleRequired);
        }
        if self.author.is_empty() {
            return Err(RequestValidationError::AuthorRequired);
        }
        if self.price <= 0 {
            return Err(RequestValidationError::PriceNotPositive);
        }
        Ok(())
    }
}

impl TryFrom<CreateBookRequest> for Book {
    type Error = RequestValidationError;

    fn try_from(request: CreateBookRequest) -> Result<Self, Self::Error> {
        request.validate()?;
        Ok(Self::draft(request.title, request.author, request.price))
    }
}

/// Body of `PATCH /books`.
///
/// Example JSON: `{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","price":10}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UpdateBookRequest {
    #[serde(default)]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[serde(default)]
    #[schema(example = 10)]
    pub price: i64,
}

impl UpdateBookRequest {
    /// Check id presence, price and id format, in that order.
    ///
    /// The price rule runs before the id format rule, so a malformed id
    /// with a bad price reports the price.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        self.checked_id().map(|_| ())
    }

    fn checked_id(&self) -> Result<BookId, RequestValidationError> {
        if self.id.is_empty() {
            return Err(RequestValidationError::IdRequired);
        }
        if self.price <= 0 {
            return Err(RequestValidationError::PriceNotPositive);
        }
        BookId::parse(&self.id).map_err(|_| RequestValidationError::InvalidId)
    }
}

impl TryFrom<UpdateBookRequest> for Book {
    type Error = RequestValidationError;

    fn try_from(request: UpdateBookRequest) -> Result<Self, Self::Error> {
        let id = request.checked_id()?;
        Ok(Self::price_change(id, request.price))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    fn create(title: &str, author: &str, price: i64) -> CreateBookRequest {
        CreateBookRequest {
            title: title.to_owned(),
            author: author.to_owned(),
            price,
        }
    }

    fn update(id: &str, price: i64) -> UpdateBookRequest {
        UpdateBookRequest {
            id: id.to_owned(),
            price,
        }
    }

    #[rstest]
    #[case(create("", "", 0), Some(RequestValidationError::TitleRequired))]
    #[case(create("", "someone", 42), Some(RequestValidationError::TitleRequired))]
    #[case(create("a book", "", 0), Some(RequestValidationError::AuthorRequired))]
    #[case(create("a book", "someone", 0), Some(RequestValidationError::PriceNotPositive))]
    #[case(create("a book", "someone", -3), Some(RequestValidationError::PriceNotPositive))]
    #[case(create("a book", "someone", 1), None)]
    fn create_rules_fail_fast_in_order(
        #[case] request: CreateBookRequest,
        #[case] expected: Option<RequestValidationError>,
    ) {
        assert_eq!(request.validate().err(), expected);
    }

    #[rstest]
    #[case(update("", 0), Some(RequestValidationError::IdRequired))]
    #[case(update("", 10), Some(RequestValidationError::IdRequired))]
    #[case(update("not-a-uuid", 0), Some(RequestValidationError::PriceNotPositive))]
    #[case(update("not-a-uuid", 10), Some(RequestValidationError::InvalidId))]
    #[case(update(VALID_ID, -1), Some(RequestValidationError::PriceNotPositive))]
    #[case(update(VALID_ID, 10), None)]
    fn update_checks_price_before_id_format(
        #[case] request: UpdateBookRequest,
        #[case] expected: Option<RequestValidationError>,
    ) {
        assert_eq!(request.validate().err(), expected);
    }

    #[rstest]
    fn create_request_becomes_unsaved_book() {
        let book = Book::try_from(create("a book", "someone", 42)).expect("valid request");
        assert!(!book.id.is_persisted());
        assert_eq!(book.title, "a book");
        assert_eq!(book.author, "someone");
        assert_eq!(book.price, 42);
    }

    #[rstest]
    fn update_request_becomes_price_change() {
        let book = Book::try_from(update(VALID_ID, 10)).expect("valid request");
        assert_eq!(book.id.to_string(), VALID_ID);
        assert_eq!(book.price, 10);
    }

    #[rstest]
    fn missing_fields_decode_as_empty() {
        let request: CreateBookRequest = serde_json::from_str("{}").expect("decodes");
        assert_eq!(request, CreateBookRequest::default());
        assert_eq!(request.validate(), Err(RequestValidationError::TitleRequired));
    }
}
