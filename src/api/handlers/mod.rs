//! HTTP request handlers for API endpoints.

pub mod not_found;
pub mod root;

pub use not_found::not_found_handler;
pub use root::root_handler;
