//! # College API
//!
//! A CRUD REST API for college records.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool
//! - HTTP server

use anyhow::Result;
use tracing::info;

use college_api::config::Settings;
use college_api::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    college_api::telemetry::init_tracing();

    info!("Starting College API...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!(addr = %application.local_addr()?, "Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
