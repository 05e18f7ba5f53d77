//! Top-level application assembly.
//!
//! # Layout
//!
//! ```text
//! axum::Router (outer chain)
//!     → TraceLayer (access log)
//!     → fallback_service: Mux (all routing, params, JSON errors)
//! ```
//!
//! The outer axum router registers no routes of its own; it only hosts
//! middleware and hands every request to the [`Mux`](crate::router::Mux).

use axum::Router as HttpRouter;

use crate::api;
use crate::api::middleware::tracing;
use crate::error::RouteError;

/// Constructs the application with all routes and middleware.
///
/// # Errors
///
/// Returns [`RouteError`] if a route pattern is malformed.
pub fn app_router() -> Result<HttpRouter, RouteError> {
    let mux = api::routes::api_routes()?.into_service();

    Ok(HttpRouter::new()
        .fallback_service(mux)
        .layer(tracing::layer()))
}
