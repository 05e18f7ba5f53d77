//! # webapi
//!
//! A small JSON web API built around a method/path router with named
//! parameters.
//!
//! ## Architecture
//!
//! - **Router** ([`router`]) - Route registration, first-match dispatch,
//!   request-scoped path parameters and the response hook that renders
//!   handler failures
//! - **API Layer** ([`api`]) - Handlers, DTOs, middleware and route
//!   registration
//! - **Assembly** ([`routes`], [`server`]) - Outer middleware chain and the
//!   HTTP listener
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"   # Optional
//! cargo run
//! curl http://127.0.0.1:8080/
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod error;
pub mod router;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{HandlerError, RouteError};
pub use router::{Mux, Router};

/// Commonly used types for handler authors.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::error::{HandlerError, RouteError};
    pub use crate::router::{
        Handler, HandlerResult, JsonErrorHook, Mux, RequestParamsExt, Router, params, plain,
    };
}
