//! Catalogue item data model.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Stable book identifier stored as a UUID.
///
/// The nil UUID marks a book that has never been persisted; repositories
/// assign a fresh identifier on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BookId(Uuid);

impl BookId {
    /// Identifier carried by books that have not been stored yet.
    pub const fn unassigned() -> Self {
        Self(Uuid::nil())
    }

    /// Generate a new random [`BookId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a textual UUID.
    ///
    /// # Examples
    /// ```
    /// use bookshop::domain::BookId;
    ///
    /// assert!(BookId::parse("3fa85f64-5717-4562-b3fc-2c963f66afa6").is_ok());
    /// assert!(BookId::parse("not-a-uuid").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(raw).map(Self)
    }

    /// Whether a repository has assigned this identifier.
    pub fn is_persisted(&self) -> bool {
        !self.0.is_nil()
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for BookId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<BookId> for Uuid {
    fn from(value: BookId) -> Self {
        value.0
    }
}

impl FromStr for BookId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Catalogue item.
///
/// ## Invariants
/// - `id` is [`BookId::unassigned`] until a repository stores the book.
/// - `language_tag` is set by the interactor on creation; clients never
///   supply it.
/// - `price` is strictly positive for every book that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub language_tag: String,
    pub price: i64,
}

impl Book {
    /// Build an unsaved book from client-settable fields.
    ///
    /// # Examples
    /// ```
    /// use bookshop::domain::Book;
    ///
    /// let book = Book::draft("a book", "someone", 42);
    /// assert!(!book.id.is_persisted());
    /// assert!(book.language_tag.is_empty());
    /// ```
    pub fn draft(title: impl Into<String>, author: impl Into<String>, price: i64) -> Self {
        Self {
            id: BookId::unassigned(),
            title: title.into(),
            author: author.into(),
            language_tag: String::new(),
            price,
        }
    }

    /// Build the partial book used to reprice an existing record.
    pub fn price_change(id: BookId, price: i64) -> Self {
        Self {
            id,
            price,
            ..Self::draft("", "", price)
        }
    }

    /// Return the book with the given identifier.
    pub fn with_id(mut self, id: BookId) -> Self {
        self.id = id;
        self
    }

    /// Return the book with the given language tag.
    pub fn with_language_tag(mut self, language_tag: impl Into<String>) -> Self {
        self.language_tag = language_tag.into();
        self
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unassigned_identifier_is_not_persisted() {
        assert!(!BookId::unassigned().is_persisted());
        assert!(!BookId::default().is_persisted());
        assert!(BookId::random().is_persisted());
    }

    #[rstest]
    #[case("")]
    #[case("not-a-uuid")]
    #[case("3fa85f64-5717-4562-b3fc")]
    fn parse_rejects_malformed_identifiers(#[case] raw: &str) {
        assert!(BookId::parse(raw).is_err());
    }

    #[rstest]
    fn display_round_trips_through_parse() {
        let id = BookId::random();
        let parsed: BookId = id.to_string().parse().expect("valid uuid");
        assert_eq!(parsed, id);
    }

    #[rstest]
    fn price_change_only_carries_id_and_price() {
        let id = BookId::random();
        let book = Book::price_change(id, 10);
        assert_eq!(book.id, id);
        assert_eq!(book.price, 10);
        assert!(book.title.is_empty());
        assert!(book.author.is_empty());
    }
}
