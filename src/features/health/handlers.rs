use axum::http::StatusCode;

use crate::shared::constants::API_ALIVE;

/// Plain-text acknowledgement that the API is up
#[utoipa::path(
    get,
    path = "/api/test",
    responses(
        (status = 200, description = "API is up", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn api_test() -> &'static str {
    API_ALIVE
}

/// Liveness probe, no store access
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Process is alive")),
    tag = "health"
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
