//! Employees API Library
//!
//! HTTP REST API over the employee service: routing, request validation,
//! transfer shapes and OpenAPI documentation.

pub mod cli;
pub mod config;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod mapping;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server bound to `host:port`.
pub async fn run_server(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env(host, port);
    run_server_with_config(config).await
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = employee_service_lib::connect(&config.employees).await?;

    // Create service and app state
    let employees = employee_service_lib::build_service(&db);
    let state = AppState::new(employees, Arc::new(db));

    // Build router
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = config.server.addr().parse()?;
    info!(service = %config.server.service_name, "Listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
