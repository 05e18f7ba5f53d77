//! API route registration.

use crate::api::handlers::{not_found_handler, root_handler};
use crate::error::RouteError;
use crate::router::{JsonErrorHook, Router};

/// Registers every API route on a router that renders failures as JSON.
///
/// # Endpoints
///
/// - `GET /` - Readiness reply
///
/// Unmatched requests fail with `404` and the JSON error body.
///
/// # Errors
///
/// Returns [`RouteError`] if a route pattern is malformed.
pub fn api_routes() -> Result<Router, RouteError> {
    let mut router = Router::with_hook(JsonErrorHook::default());

    router.get("/", root_handler)?;
    router.not_found(not_found_handler);

    Ok(router)
}
