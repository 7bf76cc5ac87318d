//! Health check endpoint

use axum::Json;

use crate::api::models::HealthResponse;

/// `GET /test`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Rover API is working!".to_string(),
    })
}
