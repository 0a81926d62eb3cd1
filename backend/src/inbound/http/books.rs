//! Book catalogue endpoints.
//!
//! ```text
//! PUT /books {"title":"a book","author":"someone","price":42}
//! GET /books/{id}
//! GET /books
//! PATCH /books {"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","price":10}
//! DELETE /books/{id}
//! ```
//!
//! Each handler decodes, validates, executes, presents and responds, and
//! stops at the first failing step. Failures go to the error presenter with
//! the status the step suggests: 400 for decoding and validation, 500 for
//! use-case failures.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, patch, put, web};

use crate::domain::{Book, Resource};
use crate::inbound::http::book_presenter::BookView;
use crate::inbound::http::book_requests::{CreateBookRequest, UpdateBookRequest};
use crate::inbound::http::error::{
    ErrorBody, Rejection, decode_json, json_response, required_path_id,
};
use crate::inbound::http::state::HttpState;

/// Store a new book.
#[utoipa::path(
    put,
    path = "/books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book stored"),
        (status = 400, description = "Malformed or invalid request", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["books"],
    operation_id = "createBook"
)]
#[put("/books")]
pub async fn create_book(state: web::Data<HttpState>, body: web::Bytes) -> HttpResponse {
    state.respond(create(&state, &body).await)
}

async fn create(state: &HttpState, body: &[u8]) -> Result<HttpResponse, Rejection> {
    let request: CreateBookRequest = decode_json(body)?;
    let book = Book::try_from(request)?;
    state.books.create_book(book).await?;
    Ok(HttpResponse::Created().finish())
}

/// Fetch one book.
#[utoipa::path(
    get,
    path = "/books/{id}",
    params(("id" = String, Path, description = "Book UUID")),
    responses(
        (status = 200, description = "Book", body = BookView),
        (status = 400, description = "Invalid book id", body = ErrorBody),
        (status = 404, description = "Book not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["books"],
    operation_id = "getBook"
)]
#[get("/books/{id}")]
pub async fn get_book(state: web::Data<HttpState>, id: web::Path<String>) -> HttpResponse {
    state.respond(fetch(&state, &id).await)
}

async fn fetch(state: &HttpState, id: &str) -> Result<HttpResponse, Rejection> {
    let id = required_path_id(id, Resource::Book)?;
    let book = state.books.get_book(id).await?;
    Ok(json_response(
        StatusCode::OK,
        &state.book_presenter.present(&book),
    )?)
}

/// List every book.
#[utoipa::path(
    get,
    path = "/books",
    responses(
        (status = 200, description = "Books in no particular order", body = [BookView]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/books")]
pub async fn list_books(state: web::Data<HttpState>) -> HttpResponse {
    state.respond(list(&state).await)
}

async fn list(state: &HttpState) -> Result<HttpResponse, Rejection> {
    let books = state.books.list_books().await?;
    let views: Vec<BookView> = books
        .iter()
        .map(|book| state.book_presenter.present(book))
        .collect();
    Ok(json_response(StatusCode::OK, &views)?)
}

/// Change the price of a book.
#[utoipa::path(
    patch,
    path = "/books",
    request_body = UpdateBookRequest,
    responses(
        (status = 202, description = "Price change accepted"),
        (status = 400, description = "Malformed or invalid request", body = ErrorBody),
        (status = 404, description = "Book not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["books"],
    operation_id = "updateBook"
)]
#[patch("/books")]
pub async fn update_book(state: web::Data<HttpState>, body: web::Bytes) -> HttpResponse {
    state.respond(reprice(&state, &body).await)
}

async fn reprice(state: &HttpState, body: &[u8]) -> Result<HttpResponse, Rejection> {
    let request: UpdateBookRequest = decode_json(body)?;
    let book = Book::try_from(request)?;
    state.books.update_book(book).await?;
    Ok(HttpResponse::Accepted().finish())
}

/// Remove a book. Removing an unknown book also succeeds.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    params(("id" = String, Path, description = "Book UUID")),
    responses(
        (status = 200, description = "Book removed or already absent"),
        (status = 400, description = "Invalid book id", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[delete("/books/{id}")]
pub async fn delete_book(state: web::Data<HttpState>, id: web::Path<String>) -> HttpResponse {
    state.respond(remove(&state, &id).await)
}

async fn remove(state: &HttpState, id: &str) -> Result<HttpResponse, Rejection> {
    let id = required_path_id(id, Resource::Book)?;
    state.books.delete_book(id).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Register the book endpoints.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bookshop::inbound::http::books;
///
/// let _app = App::new().configure(books::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_book)
        .service(list_books)
        .service(get_book)
        .service(update_book)
        .service(delete_book);
}
