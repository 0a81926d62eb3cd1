//! Bookshop service library.
//!
//! Layers, inside out:
//! - [`domain`]: entities, use cases and the ports they depend on;
//! - [`outbound`]: in-memory repositories implementing the driven ports;
//! - [`inbound`]: actix-web handlers, presenters and error presentation;
//! - [`middleware`]: request tracing.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod logging;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
