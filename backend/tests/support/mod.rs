//! Shared helpers for the HTTP endpoint suites.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test};
use bookshop::logging::Logger;
use serde_json::Value;

#[path = "../../src/server/state_builders.rs"]
mod state_builders;

/// Application wired the way the server wires it, over fresh stores.
pub(crate) fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state_builders::build_http_state(&Logger::noop()))
        .wrap(bookshop::Trace)
        .configure(bookshop::inbound::http::configure)
}

/// Read a response body as JSON, or `None` when it is empty.
pub(crate) async fn json_body(response: ServiceResponse) -> Option<Value> {
    let bytes = actix_test::read_body(response).await;
    if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).expect("json body"))
    }
}
