// Health check endpoint handler implementation

use axum::response::IntoResponse;

/// Handler for GET /health - Returns a simple health check response to verify the API is running
pub async fn health_check() -> impl IntoResponse {
    "OK"
}
