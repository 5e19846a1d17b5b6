//! Entry point for the sickness benefit server.
//!
//! Starts an HTTP server exposing the calculation API. The rule-set
//! directory may be given in `SICKNESS_RULES_DIR`; when unset the compiled-in
//! fiscal-2024 rules are used. The bind address comes from
//! `SICKNESS_BIND_ADDR` and log filtering from `RUST_LOG`.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sickness_benefit_engine::api::{AppState, create_router};
use sickness_benefit_engine::config::ConfigLoader;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let loader = match std::env::var("SICKNESS_RULES_DIR") {
        Ok(dir) => ConfigLoader::load(&dir),
        Err(_) => ConfigLoader::embedded(),
    };
    let loader = match loader {
        Ok(loader) => loader,
        Err(err) => {
            error!(error = %err, "Failed to load rule set");
            return ExitCode::FAILURE;
        }
    };
    info!(
        fiscal_year = loader.metadata().fiscal_year,
        name = %loader.metadata().name,
        "Loaded rule set"
    );

    let addr = std::env::var("SICKNESS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %addr, "Listening");

    let router = create_router(AppState::from(loader));
    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
