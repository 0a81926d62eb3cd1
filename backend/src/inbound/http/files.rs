//! File record endpoints.
//!
//! ```text
//! PUT /files {"name":"notes.txt","content":"...","owner":"Jane Doe"}
//! GET /files/{id}
//! DELETE /files {"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6"}
//! ```
//!
//! Responses carry the record itself. Owners are anonymised on reads and
//! identifiers are dropped from deletion receipts.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, put, web};

use crate::domain::{FileRecord, Resource};
use crate::inbound::http::error::{
    ErrorBody, Rejection, decode_json, json_response, required_path_id,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::required_id;

/// Store a file record.
#[utoipa::path(
    put,
    path = "/files",
    request_body = FileRecord,
    responses(
        (status = 200, description = "Stored record", body = FileRecord),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["files"],
    operation_id = "uploadFile"
)]
#[put("/files")]
pub async fn upload_file(state: web::Data<HttpState>, body: web::Bytes) -> HttpResponse {
    state.respond(upload(&state, &body).await)
}

async fn upload(state: &HttpState, body: &[u8]) -> Result<HttpResponse, Rejection> {
    let record: FileRecord = decode_json(body)?;
    let stored = state.files.upload(record).await?;
    Ok(json_response(StatusCode::OK, &stored)?)
}

/// Fetch a file record with its owner anonymised.
#[utoipa::path(
    get,
    path = "/files/{id}",
    params(("id" = String, Path, description = "File UUID")),
    responses(
        (status = 200, description = "Record with anonymised owner", body = FileRecord),
        (status = 400, description = "Invalid file id", body = ErrorBody),
        (status = 404, description = "File not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["files"],
    operation_id = "getFile"
)]
#[get("/files/{id}")]
pub async fn get_file(state: web::Data<HttpState>, id: web::Path<String>) -> HttpResponse {
    state.respond(retrieve(&state, &id).await)
}

async fn retrieve(state: &HttpState, id: &str) -> Result<HttpResponse, Rejection> {
    let id = required_path_id(id, Resource::File)?;
    let record = state.files.retrieve(id).await?;
    let record = state.file_presenter.anonymize_owner(record);
    Ok(json_response(StatusCode::OK, &record)?)
}

/// Remove a file record. Removing an unknown record also succeeds.
#[utoipa::path(
    delete,
    path = "/files",
    request_body = FileRecord,
    responses(
        (status = 200, description = "Removed record without its id", body = FileRecord),
        (status = 400, description = "Missing or invalid id", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["files"],
    operation_id = "deleteFile"
)]
#[delete("/files")]
pub async fn delete_file(state: web::Data<HttpState>, body: web::Bytes) -> HttpResponse {
    state.respond(remove(&state, &body).await)
}

async fn remove(state: &HttpState, body: &[u8]) -> Result<HttpResponse, Rejection> {
    let record: FileRecord = decode_json(body)?;
    let id = required_id(record.id)?;
    let removed = state.files.delete(&id).await?;
    let removed = state.file_presenter.remove_identifier(removed);
    Ok(json_response(StatusCode::OK, &removed)?)
}

/// Register the file endpoints.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_file)
        .service(get_file)
        .service(delete_file);
}
