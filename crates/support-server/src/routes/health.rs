use axum::Json;

/// GET / — health check: a fixed payload indicating the service is up.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Healthy" }))
}
