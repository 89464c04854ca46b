/*
 * Responsibility
 * - tracing setup
 * - Config → PolicySet → Router assembly
 * - Middleware order (security headers outermost so every response gets them)
 * - axum::serve()
 */
use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware};

fn init_tracing() {
    // RUST_LOG wins when set, e.g. RUST_LOG=debug,tower_http=debug
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    tracing::info!(
        "starting in {:?} mode on {} (security headers: {})",
        config.app_env,
        config.addr,
        config.security_headers.mode
    );

    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(config: &Config) -> Router {
    let router = Router::new().nest("/api/v1", api::v1::routes());
    let router = middleware::http::apply(router, config.request_timeout);

    // Added last so it wraps timeouts and other error responses too.
    middleware::security_headers::apply(router, config.security_headers.policy())
}
