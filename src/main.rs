/*
 * Responsibility
 * - tokio runtime entry point
 * - Calls app::run(); no logic here
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    secure_headers::app::run().await
}
