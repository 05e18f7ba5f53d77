//! Handler for the service root.

use axum::Json;
use axum::extract::Request;

use crate::api::dto::status::StatusResponse;
use crate::error::HandlerError;

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// {"status": "OK", "message": "ready"}
/// ```
pub async fn root_handler(_req: Request) -> Result<Json<StatusResponse>, HandlerError> {
    Ok(Json(StatusResponse {
        status: "OK".to_string(),
        message: "ready".to_string(),
    }))
}
