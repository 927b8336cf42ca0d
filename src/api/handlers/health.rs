//! Root and health check handlers.

use axum::Json;
use serde_json::{Value, json};

/// Root endpoint - basic API information.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "BFHL API is running",
        "endpoints": {
            "POST /bfhl": "Process array data"
        }
    }))
}

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy"
    }))
}
