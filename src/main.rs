#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::process::ExitCode;

use crate::config::Config;
use crate::services::catalog::CatalogClient;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let catalog = match CatalogClient::new(&config.catalog_api_url, config.timeouts) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "catalog client init failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(catalog_api_url = %catalog.base_url(), "catalog relay configured");

    let state = state::AppState::new(catalog);
    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            return ExitCode::FAILURE;
        }
    };

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, "catalog-admin listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
