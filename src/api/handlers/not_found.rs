//! Fallback for requests no route matches.

use axum::extract::Request;

use crate::error::HandlerError;

/// Fails every request with `404 Not Found`, leaving the body to the
/// response hook.
pub async fn not_found_handler(_req: Request) -> Result<(), HandlerError> {
    Err(HandlerError::not_found())
}
