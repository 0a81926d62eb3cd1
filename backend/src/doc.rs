//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects every endpoint and schema exposed by the HTTP
//! adapter. Swagger UI serves it at `/docs` in debug builds, and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::FileRecord;
use crate::inbound::http::book_presenter::BookView;
use crate::inbound::http::book_requests::{CreateBookRequest, UpdateBookRequest};
use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshop API",
        description = "Catalogue CRUD and file record storage with locale-aware presentation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::books::create_book,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::update_book,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::files::upload_file,
        crate::inbound::http::files::get_file,
        crate::inbound::http::files::delete_file,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BookView,
        CreateBookRequest,
        UpdateBookRequest,
        FileRecord,
        ErrorBody
    )),
    tags(
        (name = "books", description = "Catalogue operations"),
        (name = "files", description = "File record storage"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
