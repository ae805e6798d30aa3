//! Customer Service API
//!
//! HTTP service exposing CRUD management of customers and their family
//! members, backed by PostgreSQL.

mod config;
mod dto;
mod handlers;
mod middleware;
mod routes;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use custsvc_domain::customer::CustomerService;
use custsvc_pg::PgCustomerRepository;

use crate::config::Config;

/// Application state shared across handlers
pub struct AppState<U> {
    pub usecase: Arc<U>,
}

impl<U> Clone for AppState<U> {
    fn clone(&self) -> Self {
        Self {
            usecase: self.usecase.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting customer service");

    // Load environment variables
    dotenvy::dotenv().ok();

    let cfg = Config::load();

    // Establish the bounded connection pool once; it is handed to the
    // repository explicitly and never reached through a global.
    info!("Connecting to PostgreSQL");
    let pool = custsvc_pg::new_pool(&cfg.pg_dsn).await?;

    let repository = PgCustomerRepository::new(pool);
    let service = CustomerService::new(repository);

    // Create shared application state
    let state = AppState {
        usecase: Arc::new(service),
    };

    // Build HTTP router
    let app = routes::create_router(state, cfg.cors_allow.clone());

    let addr = format!("0.0.0.0:{}", cfg.port);
    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
