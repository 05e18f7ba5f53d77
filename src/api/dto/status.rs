//! DTO for plain status replies.

use serde::Serialize;

/// Status reply returned by informational endpoints.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}
