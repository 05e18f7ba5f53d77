//! Error types for route registration and request handling.

use axum::http::StatusCode;
use thiserror::Error;

/// Boxed error accepted as the cause of a [`HandlerError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A route pattern rejected at registration time.
///
/// Registration fails fast so that a malformed pattern surfaces at startup
/// instead of silently never matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route pattern {pattern:?} must start with '/'")]
    MissingLeadingSlash { pattern: String },

    #[error("route pattern {pattern:?} contains an empty segment")]
    EmptySegment { pattern: String },

    #[error("route pattern {pattern:?} has an invalid parameter name {name:?}")]
    InvalidParamName { pattern: String, name: String },

    #[error("route pattern {pattern:?} binds parameter {name:?} more than once")]
    DuplicateParam { pattern: String, name: String },

    #[error("route pattern {pattern:?} uses a wildcard segment, which is not supported")]
    Wildcard { pattern: String },
}

/// Failure reported by a handler that did not write its own response.
///
/// Carries the HTTP status the client should see and, optionally, the error
/// that caused it. The router hands it to the configured
/// [`ResponseHook`](crate::router::ResponseHook), which renders the body.
#[derive(Debug, Error)]
#[error("request failed with {status}")]
pub struct HandlerError {
    status: StatusCode,
    #[source]
    source: Option<BoxError>,
}

impl HandlerError {
    /// A failure with a status and no underlying error.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            source: None,
        }
    }

    /// A failure with a status and the error that caused it.
    pub fn with_source(status: StatusCode, source: impl Into<BoxError>) -> Self {
        Self {
            status,
            source: Some(source.into()),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    pub fn bad_request(source: impl Into<BoxError>) -> Self {
        Self::with_source(StatusCode::BAD_REQUEST, source)
    }

    pub fn internal(source: impl Into<BoxError>) -> Self {
        Self::with_source(StatusCode::INTERNAL_SERVER_ERROR, source)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message of the underlying error, if there is one.
    pub fn cause_message(&self) -> Option<String> {
        self.source.as_ref().map(|e| e.to_string())
    }

    /// Message shown to clients: the underlying error's text, or empty.
    pub fn message(&self) -> String {
        self.cause_message().unwrap_or_default()
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(e: serde_json::Error) -> Self {
        Self::bad_request(e)
    }
}

impl From<axum::Error> for HandlerError {
    fn from(e: axum::Error) -> Self {
        Self::bad_request(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_without_source_is_empty() {
        let err = HandlerError::not_found();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "");
        assert!(err.cause_message().is_none());
    }

    #[test]
    fn test_message_uses_source_text() {
        let err = HandlerError::internal(anyhow::anyhow!("connection refused"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "connection refused");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_json_error_maps_to_bad_request() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: HandlerError = parse.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(!err.message().is_empty());
    }

    #[test]
    fn test_route_error_display() {
        let err = RouteError::DuplicateParam {
            pattern: "/a/:id/:id".to_string(),
            name: "id".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "route pattern \"/a/:id/:id\" binds parameter \"id\" more than once"
        );
    }
}
