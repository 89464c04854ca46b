/*
 * Responsibility
 * - v1 URL layout
 * - Security headers are applied above this level, in app::build_router
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::health::health;

pub fn routes() -> Router {
    Router::new().route("/health", get(health))
}
