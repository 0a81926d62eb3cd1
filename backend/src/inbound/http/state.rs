//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on ports and presenters and stay testable without I/O.

use std::sync::Arc;

use actix_web::HttpResponse;

use crate::domain::ports::{BookInteractor, FileInteractor};
use crate::inbound::http::book_presenter::BookPresenter;
use crate::inbound::http::error::{ErrorPresenter, Rejection};
use crate::inbound::http::file_presenter::FilePresenter;

/// Parameter object bundling the implementations handlers depend on.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub books: Arc<dyn BookInteractor>,
    pub book_presenter: Arc<dyn BookPresenter>,
    pub files: Arc<dyn FileInteractor>,
    pub file_presenter: Arc<dyn FilePresenter>,
    pub errors: Arc<dyn ErrorPresenter>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub books: Arc<dyn BookInteractor>,
    pub book_presenter: Arc<dyn BookPresenter>,
    pub files: Arc<dyn FileInteractor>,
    pub file_presenter: Arc<dyn FilePresenter>,
    pub errors: Arc<dyn ErrorPresenter>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bookshop::domain::{BookService, FileService};
    /// use bookshop::inbound::http::book_presenter::TitleCaseBookPresenter;
    /// use bookshop::inbound::http::error::JsonErrorPresenter;
    /// use bookshop::inbound::http::file_presenter::MaskingFilePresenter;
    /// use bookshop::inbound::http::state::{HttpState, HttpStatePorts};
    /// use bookshop::logging::Logger;
    /// use bookshop::outbound::persistence::{InMemoryBookRepository, InMemoryFileRepository};
    /// use mockable::DefaultClock;
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     books: Arc::new(BookService::new(Arc::new(InMemoryBookRepository::new()))),
    ///     book_presenter: Arc::new(TitleCaseBookPresenter::new(Logger::noop())),
    ///     files: Arc::new(FileService::new(
    ///         Arc::new(InMemoryFileRepository::new()),
    ///         Arc::new(DefaultClock),
    ///     )),
    ///     file_presenter: Arc::new(MaskingFilePresenter),
    ///     errors: Arc::new(JsonErrorPresenter::new(Logger::noop())),
    /// });
    /// let _books = state.books.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            books,
            book_presenter,
            files,
            file_presenter,
            errors,
        } = ports;
        Self {
            books,
            book_presenter,
            files,
            file_presenter,
            errors,
        }
    }

    /// Finish a handler: pass successes through and present rejections.
    pub fn respond(&self, outcome: Result<HttpResponse, Rejection>) -> HttpResponse {
        outcome.unwrap_or_else(|rejection| rejection.into_response(self.errors.as_ref()))
    }
}
