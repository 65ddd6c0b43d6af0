//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{CollegeService, CollegeServiceImpl};
use crate::config::Settings;
use crate::domain::CollegeRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::PgCollegeRepository;
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub colleges: Arc<dyn CollegeService>,
    pub repository: Arc<dyn CollegeRepository>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the college service on top of a repository.
    pub fn new<R>(repository: Arc<R>, settings: Settings) -> Self
    where
        R: CollegeRepository + 'static,
    {
        let colleges = Arc::new(CollegeServiceImpl::new(repository.clone()));
        Self {
            colleges,
            repository,
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with middleware layers applied.
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);
    routes::create_router(state)
        .layer(create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
            tracing::info!("Database migrations applied");
        }

        handlers::health::init_server_start();

        let addr = settings.server_addr();
        let repository = Arc::new(PgCollegeRepository::new(db));
        let state = AppState::new(repository, settings);
        let router = build_router(state);

        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
