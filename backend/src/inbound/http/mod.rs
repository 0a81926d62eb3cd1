//! HTTP inbound adapter exposing the REST endpoints.

pub mod book_presenter;
pub mod book_requests;
pub mod books;
pub mod error;
pub mod file_presenter;
pub mod files;
pub mod health;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

/// Register every book and file endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    books::configure(cfg);
    files::configure(cfg);
}
