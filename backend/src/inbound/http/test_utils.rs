//! Test helpers for inbound HTTP components.

use std::sync::{Arc, Mutex};

use actix_web::HttpResponse;

use crate::domain::AsDomainError;
use crate::domain::ports::{MockBookInteractor, MockFileInteractor};
use crate::inbound::http::book_presenter::{BookPresenter, TitleCaseBookPresenter};
use crate::inbound::http::error::{ErrorPresenter, JsonErrorPresenter};
use crate::inbound::http::file_presenter::{FilePresenter, MaskingFilePresenter};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::logging::Logger;

/// Error presenter double recording what handlers hand over before
/// delegating to the production presenter.
pub struct RecordingErrorPresenter {
    inner: JsonErrorPresenter,
    seen: Mutex<Vec<(String, u16)>>,
}

impl RecordingErrorPresenter {
    pub fn new() -> Self {
        Self {
            inner: JsonErrorPresenter::new(Logger::noop()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Error texts and suggested statuses received so far.
    pub fn seen(&self) -> Vec<(String, u16)> {
        self.seen.lock().expect("recording lock").clone()
    }
}

impl Default for RecordingErrorPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorPresenter for RecordingErrorPresenter {
    fn present(&self, error: Option<&dyn AsDomainError>, suggested: u16) -> Option<HttpResponse> {
        if let Some(err) = error {
            self.seen
                .lock()
                .expect("recording lock")
                .push((err.to_string(), suggested));
        }
        self.inner.present(error, suggested)
    }
}

/// Build handler state over mocked interactors and production presenters.
pub fn state_with(
    books: MockBookInteractor,
    files: MockFileInteractor,
    errors: Arc<RecordingErrorPresenter>,
) -> HttpState {
    state_with_presenters(
        books,
        files,
        Presenters {
            books: Arc::new(TitleCaseBookPresenter::new(Logger::noop())),
            files: Arc::new(MaskingFilePresenter),
        },
        errors,
    )
}

/// Presenter pair handed to [`state_with_presenters`].
pub struct Presenters {
    pub books: Arc<dyn BookPresenter>,
    pub files: Arc<dyn FilePresenter>,
}

/// Build handler state with caller-supplied presenters, so handler tests can
/// observe the present step in isolation.
pub fn state_with_presenters(
    books: MockBookInteractor,
    files: MockFileInteractor,
    presenters: Presenters,
    errors: Arc<RecordingErrorPresenter>,
) -> HttpState {
    HttpState::new(HttpStatePorts {
        books: Arc::new(books),
        book_presenter: presenters.books,
        files: Arc::new(files),
        file_presenter: presenters.files,
        errors,
    })
}
