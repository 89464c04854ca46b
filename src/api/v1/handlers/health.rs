/*
 * Responsibility
 * - GET /health (liveness)
 * - Handy for checking which headers the middleware stack adds
 */
use axum::{Json, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
