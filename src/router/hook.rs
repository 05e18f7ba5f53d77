//! Rendering of handler failures.
//!
//! Whenever a handler returns `Err(HandlerError)`, the router passes the
//! failure to the [`ResponseHook`] it was built with. The hook is plain
//! configuration: it is fixed when the router is constructed and only read
//! while serving.

use std::sync::Arc;

use axum::http::{HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::HandlerError;

/// Body written when the error body itself cannot be serialized.
pub const ENCODE_FAILURE_BODY: &str =
    r#"{"status":"Internal Server Error","message":"problem encoding JSON"}"#;

/// The parts of a request a hook may need after the handler consumed it.
#[derive(Debug, Clone)]
pub struct RequestHead {
    pub method: Method,
    pub uri: Uri,
}

/// Turns a handler failure into the response sent to the client.
pub trait ResponseHook: Send + Sync + 'static {
    fn respond(&self, head: &RequestHead, error: &HandlerError) -> Response;
}

/// Default hook: the failure's status with an empty body.
#[derive(Debug, Clone, Copy, Default)]
pub struct BareStatusHook;

impl ResponseHook for BareStatusHook {
    fn respond(&self, _head: &RequestHead, error: &HandlerError) -> Response {
        error.status().into_response()
    }
}

/// Server-side sink for errors behind 5xx responses.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorLogger: Send + Sync {
    fn log(&self, message: &str);
}

/// [`ErrorLogger`] writing through `tracing` at `ERROR` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorLogger;

impl ErrorLogger for TracingErrorLogger {
    fn log(&self, message: &str) {
        tracing::error!(error = %message, "request failed");
    }
}

/// JSON error body: `{"status": "<status text>", "message": "<error>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

/// Renders every failure with status >= 400 as an [`ErrorBody`] and reports
/// server errors to an [`ErrorLogger`].
///
/// # Behavior
///
/// | Status    | Body                          | Logged                    |
/// |-----------|-------------------------------|---------------------------|
/// | < 400     | empty                         | no                        |
/// | 400 - 499 | `{"status":..,"message":..}`  | no                        |
/// | >= 500    | `{"status":..,"message":..}`  | once, if it has a cause   |
///
/// # Example Response
///
/// ```json
/// {"status": "Not Found", "message": ""}
/// ```
#[derive(Clone)]
pub struct JsonErrorHook {
    logger: Arc<dyn ErrorLogger>,
}

impl JsonErrorHook {
    pub fn new(logger: Arc<dyn ErrorLogger>) -> Self {
        Self { logger }
    }
}

impl Default for JsonErrorHook {
    fn default() -> Self {
        Self::new(Arc::new(TracingErrorLogger))
    }
}

impl ResponseHook for JsonErrorHook {
    fn respond(&self, head: &RequestHead, error: &HandlerError) -> Response {
        let status = error.status();

        if status.is_server_error()
            && let Some(cause) = error.cause_message()
        {
            self.logger.log(&cause);
        }

        if status.as_u16() < 400 {
            return status.into_response();
        }

        tracing::debug!(
            method = %head.method,
            path = %head.uri.path(),
            status = status.as_u16(),
            "Rendering error response"
        );

        let body = ErrorBody {
            status: status.canonical_reason().unwrap_or_default().to_string(),
            message: error.message(),
        };

        json_response(status, &body)
    }
}

/// Serializes `body` with the given status, falling back to
/// [`ENCODE_FAILURE_BODY`] if serialization fails.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    let bytes = match serde_json::to_vec(body) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode error body");
            ENCODE_FAILURE_BODY.as_bytes().to_vec()
        }
    };

    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        bytes,
    )
        .into_response()
}
