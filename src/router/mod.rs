//! Method and path router with named parameters.
//!
//! # Lifecycle
//!
//! ```text
//! Startup:  Router::new() / Router::with_hook(..)
//!           → get/post/put/patch/delete/head/options(pattern, handler)
//!           → not_found(handler)
//!           → into_service()            (freezes the table)
//! Serving:  Mux (tower::Service), shared by every connection
//! ```
//!
//! # Matching
//!
//! - Routes are tried in registration order; the first match wins, so
//!   registering `/user/:id` before `/user/active` sends `/user/active` to
//!   the parameter route.
//! - A pattern matches when it has as many segments as the request path, its
//!   literal segments are equal and its `:name` segments are non-empty.
//! - Leading and trailing slashes of the request path are ignored.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut router = Router::with_hook(JsonErrorHook::default());
//! router.get("/user/:name", |req: Request| async move {
//!     Ok::<_, HandlerError>(format!("hello {}", params(&req, "name")))
//! })?;
//! let mux = router.into_service();
//! ```

pub mod handler;
pub mod hook;
pub mod mux;
pub mod params;
pub mod pattern;
mod table;

use std::sync::Arc;

use axum::http::Method;

use crate::error::RouteError;

pub use handler::{Handler, HandlerResult, Plain, plain};
pub use hook::{
    BareStatusHook, ErrorBody, ErrorLogger, JsonErrorHook, RequestHead, ResponseHook,
    TracingErrorLogger,
};
pub use mux::Mux;
pub use params::{Params, RequestParamsExt, params};
pub use pattern::{Pattern, Segment};

use mux::Inner;
use table::RouteTable;

/// Route registration. Consumed by [`Router::into_service`] once every
/// route is in place.
pub struct Router {
    table: RouteTable,
    not_found: Option<Arc<dyn Handler>>,
    hook: Arc<dyn ResponseHook>,
}

impl Router {
    /// Router whose failures are rendered as a bare status
    /// ([`BareStatusHook`]).
    pub fn new() -> Self {
        Self::with_hook(BareStatusHook)
    }

    /// Router whose failures are rendered by `hook`.
    pub fn with_hook(hook: impl ResponseHook) -> Self {
        Self {
            table: RouteTable::default(),
            not_found: None,
            hook: Arc::new(hook),
        }
    }

    /// Registers `handler` for `method` requests matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] if the pattern is malformed.
    pub fn route<H: Handler>(
        &mut self,
        method: Method,
        pattern: &str,
        handler: H,
    ) -> Result<&mut Self, RouteError> {
        let pattern = Pattern::parse(pattern)?;
        tracing::debug!(method = %method, pattern = pattern.as_str(), "Registered route");
        self.table.insert(method, pattern, Arc::new(handler));
        Ok(self)
    }

    /// Registers `handler` for `GET` requests matching `pattern`.
    pub fn get<H: Handler>(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.route(Method::GET, pattern, handler)
    }

    /// Registers `handler` for `POST` requests matching `pattern`.
    pub fn post<H: Handler>(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.route(Method::POST, pattern, handler)
    }

    /// Registers `handler` for `PUT` requests matching `pattern`.
    pub fn put<H: Handler>(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.route(Method::PUT, pattern, handler)
    }

    /// Registers `handler` for `PATCH` requests matching `pattern`.
    pub fn patch<H: Handler>(
        &mut self,
        pattern: &str,
        handler: H,
    ) -> Result<&mut Self, RouteError> {
        self.route(Method::PATCH, pattern, handler)
    }

    /// Registers `handler` for `DELETE` requests matching `pattern`.
    pub fn delete<H: Handler>(
        &mut self,
        pattern: &str,
        handler: H,
    ) -> Result<&mut Self, RouteError> {
        self.route(Method::DELETE, pattern, handler)
    }

    /// Registers `handler` for `HEAD` requests matching `pattern`.
    pub fn head<H: Handler>(&mut self, pattern: &str, handler: H) -> Result<&mut Self, RouteError> {
        self.route(Method::HEAD, pattern, handler)
    }

    /// Registers `handler` for `OPTIONS` requests matching `pattern`.
    pub fn options<H: Handler>(
        &mut self,
        pattern: &str,
        handler: H,
    ) -> Result<&mut Self, RouteError> {
        self.route(Method::OPTIONS, pattern, handler)
    }

    /// Handler for requests no route matches. Without one, such requests
    /// get `404 Not Found` with an empty body.
    pub fn not_found<H: Handler>(&mut self, handler: H) -> &mut Self {
        self.not_found = Some(Arc::new(handler));
        self
    }

    /// Freezes the route table into a [`Mux`] ready to serve traffic.
    pub fn into_service(self) -> Mux {
        tracing::debug!(routes = self.table.len(), "Router frozen");
        Mux::new(Inner {
            table: self.table,
            not_found: self.not_found,
            hook: self.hook,
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
