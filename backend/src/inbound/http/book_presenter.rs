//! External representation of books.

use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{Book, LanguageTag};
use crate::logging::Logger;

/// Prefix namespacing book identifiers in responses.
pub const BOOK_ID_PREFIX: &str = "book:";

/// Book as returned by the read endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookView {
    #[schema(example = "book:3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "A Book")]
    pub title: String,
    #[schema(example = "someone")]
    pub author: String,
    #[schema(example = 42)]
    pub price: i64,
}

/// Shapes stored books for clients.
#[cfg_attr(test, mockall::automock)]
pub trait BookPresenter: Send + Sync {
    /// Build the client view of `book`. Never fails.
    fn present(&self, book: &Book) -> BookView;
}

/// Presenter namespacing identifiers and title-casing titles in the book's
/// own language.
///
/// # Examples
/// ```
/// use bookshop::domain::{Book, BookId};
/// use bookshop::inbound::http::book_presenter::{BookPresenter, TitleCaseBookPresenter};
/// use bookshop::logging::Logger;
///
/// let presenter = TitleCaseBookPresenter::new(Logger::noop());
/// let book = Book::draft("a book", "someone", 42)
///     .with_id(BookId::random())
///     .with_language_tag("en");
/// assert_eq!(presenter.present(&book).title, "A Book");
/// ```
#[derive(Clone, Debug)]
pub struct TitleCaseBookPresenter {
    logger: Logger,
}

impl TitleCaseBookPresenter {
    /// Create a presenter reporting unusable language tags through `logger`.
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    fn title(&self, book: &Book) -> String {
        match LanguageTag::parse(&book.language_tag) {
            Ok(tag) => tag.title_case(&book.title),
            Err(err) => {
                self.logger.in_scope(|| {
                    warn!(
                        book_id = %book.id,
                        language_tag = %book.language_tag,
                        error = %err,
                        "unusable language tag; title left as stored"
                    );
                });
                book.title.clone()
            }
        }
    }
}

impl BookPresenter for TitleCaseBookPresenter {
    fn present(&self, book: &Book) -> BookView {
        BookView {
            id: format!("{BOOK_ID_PREFIX}{}", book.id),
            title: self.title(book),
            author: book.author.clone(),
            price: book.price,
        }
    }
}
