use crate::model::HealthResponse;
use axum::Json;

pub const ROOT_MESSAGE: &str = "URL Shortener service is running. See /docs for API.";

pub async fn root_handler() -> &'static str {
    ROOT_MESSAGE
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
