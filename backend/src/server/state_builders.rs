//! Builders wiring repositories, interactors and presenters into handler
//! state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use bookshop::domain::{BookService, FileService};
use bookshop::inbound::http::book_presenter::TitleCaseBookPresenter;
use bookshop::inbound::http::error::JsonErrorPresenter;
use bookshop::inbound::http::file_presenter::MaskingFilePresenter;
use bookshop::inbound::http::state::{HttpState, HttpStatePorts};
use bookshop::logging::Logger;
use bookshop::outbound::persistence::{InMemoryBookRepository, InMemoryFileRepository};

/// Build handler state over fresh in-memory stores.
///
/// The state is created once and shared by every worker, so all workers see
/// the same stores.
pub(crate) fn build_http_state(logger: &Logger) -> web::Data<HttpState> {
    let books = BookService::new(Arc::new(InMemoryBookRepository::new()));
    let files = FileService::new(
        Arc::new(InMemoryFileRepository::new()),
        Arc::new(DefaultClock),
    );
    web::Data::new(HttpState::new(HttpStatePorts {
        books: Arc::new(books),
        book_presenter: Arc::new(TitleCaseBookPresenter::new(logger.clone())),
        files: Arc::new(files),
        file_presenter: Arc::new(MaskingFilePresenter),
        errors: Arc::new(JsonErrorPresenter::new(logger.clone())),
    }))
}
