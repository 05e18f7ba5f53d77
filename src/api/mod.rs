//! REST API layer.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - Request handlers
//! - [`middleware`] - Layers applied around the router
//! - [`routes`] - Route registration
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
