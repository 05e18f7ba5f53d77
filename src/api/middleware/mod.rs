//! HTTP middleware wrapped around the router.

pub mod tracing;
