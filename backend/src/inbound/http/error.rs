//! HTTP error presentation.
//!
//! Every failure leaving a handler goes through an [`ErrorPresenter`], the
//! single place that decides the client-visible status and message. Named
//! domain conditions win over the status a handler suggests; anything that
//! would surface as a server error is redacted and logged instead.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{AsDomainError, DomainError, Resource};
use crate::inbound::http::validation::RequestValidationError;
use crate::logging::Logger;
use crate::middleware::trace::TraceId;

/// Message sent to clients in place of internal failure details.
pub const REDACTED_MESSAGE: &str = "internal server error";

/// JSON body written for every error response.
///
/// # Examples
/// ```
/// use bookshop::inbound::http::error::ErrorBody;
///
/// let body = ErrorBody {
///     status: "Not Found".to_owned(),
///     message: "book not found".to_owned(),
/// };
/// assert_eq!(
///     serde_json::to_string(&body).expect("serialises"),
///     r#"{"status":"Not Found","message":"book not found"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Reason phrase of the response status.
    #[schema(example = "Not Found")]
    pub status: String,
    /// Text safe to show to clients.
    #[schema(example = "book not found")]
    pub message: String,
}

/// Final status and message chosen for a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Status written to the response.
    pub status: StatusCode,
    /// Message written to the response body.
    pub message: String,
    /// Whether the error's own text was withheld from the client.
    pub redacted: bool,
}

impl Resolution {
    fn exposed(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            redacted: false,
        }
    }

    fn redacted() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: REDACTED_MESSAGE.to_owned(),
            redacted: true,
        }
    }

    /// Response body for this resolution.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            status: self.status.canonical_reason().unwrap_or_default().to_owned(),
            message: self.message.clone(),
        }
    }
}

fn recognised_status(code: u16) -> Option<StatusCode> {
    StatusCode::from_u16(code)
        .ok()
        .filter(|status| status.canonical_reason().is_some())
}

/// Decide the status and message for `error` given the handler's suggested
/// status. The first matching rule wins:
///
/// 1. domain "not found" → 404 with the domain text;
/// 2. domain "invalid identifier" → 400 with the domain text;
/// 3. suggested 500 → redacted 500;
/// 4. any other recognised status → that status with the error's text;
/// 5. anything else → redacted 500.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use bookshop::domain::{DomainError, Resource};
/// use bookshop::inbound::http::error::resolve;
///
/// let resolution = resolve(&DomainError::NotFound(Resource::Book), 500);
/// assert_eq!(resolution.status, StatusCode::NOT_FOUND);
/// assert_eq!(resolution.message, "book not found");
/// ```
pub fn resolve(error: &dyn AsDomainError, suggested: u16) -> Resolution {
    match error.domain_error() {
        Some(domain @ DomainError::NotFound(_)) => {
            return Resolution::exposed(StatusCode::NOT_FOUND, domain.to_string());
        }
        Some(domain @ DomainError::InvalidIdentifier(_)) => {
            return Resolution::exposed(StatusCode::BAD_REQUEST, domain.to_string());
        }
        None => {}
    }

    match recognised_status(suggested) {
        Some(StatusCode::INTERNAL_SERVER_ERROR) | None => Resolution::redacted(),
        Some(status) => Resolution::exposed(status, error.to_string()),
    }
}

/// Turns failures into HTTP responses.
pub trait ErrorPresenter: Send + Sync {
    /// Build the response for `error`, or `None` when there is no error.
    fn present(&self, error: Option<&dyn AsDomainError>, suggested: u16) -> Option<HttpResponse>;
}

/// Production presenter writing [`ErrorBody`] JSON.
#[derive(Clone, Debug)]
pub struct JsonErrorPresenter {
    logger: Logger,
}

impl JsonErrorPresenter {
    /// Create a presenter logging redacted failures through `logger`.
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl ErrorPresenter for JsonErrorPresenter {
    fn present(&self, error: Option<&dyn AsDomainError>, suggested: u16) -> Option<HttpResponse> {
        let error = error?;
        let resolution = resolve(error, suggested);
        if resolution.redacted {
            let trace_id = TraceId::current().map(|id| id.to_string());
            self.logger.in_scope(|| {
                error!(
                    error = %error,
                    suggested_status = suggested,
                    trace_id = trace_id.as_deref().unwrap_or("-"),
                    "request failed with an internal error"
                );
            });
        }
        Some(HttpResponse::build(resolution.status).json(resolution.body()))
    }
}

/// Adapter-level failures raised before or after the use case runs.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The request body is not valid JSON for the endpoint.
    #[error(transparent)]
    Decode(serde_json::Error),
    /// The decoded command broke a validation rule.
    #[error(transparent)]
    Validation(#[from] RequestValidationError),
    /// The path identifier segment is empty.
    #[error("{0} id is required")]
    MissingPathId(Resource),
    /// The response body could not be serialised.
    #[error("failed to encode response: {0}")]
    Encode(serde_json::Error),
}

impl AsDomainError for RequestError {}

impl RequestError {
    fn suggested_status(&self) -> StatusCode {
        match self {
            Self::Decode(_) | Self::Validation(_) | Self::MissingPathId(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A failed request step waiting to be presented.
///
/// Handlers short-circuit with `?`; the conversions below attach the status
/// each kind of failure suggests.
pub struct Rejection {
    error: Box<dyn AsDomainError>,
    suggested: StatusCode,
}

impl Rejection {
    /// Wrap an arbitrary failure with a suggested status.
    pub fn new(error: impl AsDomainError + 'static, suggested: StatusCode) -> Self {
        Self {
            error: Box::new(error),
            suggested,
        }
    }

    /// Status the failing step suggested.
    pub fn suggested(&self) -> StatusCode {
        self.suggested
    }

    /// Render through `presenter`.
    pub fn into_response(self, presenter: &dyn ErrorPresenter) -> HttpResponse {
        presenter
            .present(Some(&*self.error), self.suggested.as_u16())
            .unwrap_or_else(|| HttpResponse::InternalServerError().finish())
    }
}

impl std::fmt::Debug for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rejection")
            .field("error", &self.error.to_string())
            .field("suggested", &self.suggested)
            .finish()
    }
}

impl From<RequestError> for Rejection {
    fn from(error: RequestError) -> Self {
        let suggested = error.suggested_status();
        Self::new(error, suggested)
    }
}

impl From<RequestValidationError> for Rejection {
    fn from(error: RequestValidationError) -> Self {
        RequestError::from(error).into()
    }
}

impl From<crate::domain::Error> for Rejection {
    fn from(error: crate::domain::Error) -> Self {
        Self::new(error, StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Decode a JSON request body.
pub(crate) fn decode_json<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, RequestError> {
    serde_json::from_slice(body).map_err(RequestError::Decode)
}

/// Reject an empty identifier taken from the request path.
pub(crate) fn required_path_id(raw: &str, resource: Resource) -> Result<&str, RequestError> {
    if raw.is_empty() {
        return Err(RequestError::MissingPathId(resource));
    }
    Ok(raw)
}

/// Serialise `value` into a JSON response with the given status.
pub(crate) fn json_response(
    status: StatusCode,
    value: &impl Serialize,
) -> Result<HttpResponse, RequestError> {
    let body = serde_json::to_vec(value).map_err(RequestError::Encode)?;
    Ok(HttpResponse::build(status)
        .content_type(actix_web::http::header::ContentType::json())
        .body(body))
}
