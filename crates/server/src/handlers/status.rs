//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: &'static str,
}

/// GET /api/status - Liveness check. Always succeeds.
pub async fn service_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        success: true,
        message: "conversion service is running",
    })
}
