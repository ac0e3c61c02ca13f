// src/server/mod.rs - local development health endpoint
//
// Serves the same wire contract the dashboard polls, so the client side can
// be exercised without the real backend.

pub mod backend;
pub mod routes;

pub use backend::HealthBackend;

use crate::core::config::ServerConfig;
use crate::core::prelude::*;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::SocketAddr;

/// Binds the endpoint and returns the not-yet-awaited server with its address.
/// Port 0 picks a free port.
pub fn bind_dev_server(
    host: &str,
    port: u16,
    backend: web::Data<HealthBackend>,
) -> Result<(Server, SocketAddr)> {
    let http_server = HttpServer::new(move || {
        App::new()
            .app_data(backend.clone())
            .configure(routes::configure)
    })
    .workers(1)
    .shutdown_timeout(5)
    .disable_signals()
    .bind((host, port))
    .map_err(|e| AppError::Validation(format!("Port {} bind failed: {}", port, e)))?;

    let addr = http_server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| AppError::Validation(format!("No address bound for {}:{}", host, port)))?;

    Ok((http_server.run(), addr))
}

pub async fn run_dev_server(config: &ServerConfig, backend: web::Data<HealthBackend>) -> Result<()> {
    let (server, addr) = bind_dev_server(&config.host, config.port, backend)?;
    log::info!("Dev health endpoint on http://{}/api/health/", addr);
    server.await.map_err(AppError::Io)
}
