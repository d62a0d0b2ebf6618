#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use courier_server::handler;
use courier_server::service::ServiceState;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Cli, log_server_config};

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "courier_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "courier_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "courier_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();
    log_server_config(&cli.server);

    let service_config = cli
        .service_config()
        .context("invalid service configuration")?;

    let state =
        ServiceState::from_config(&service_config).context("failed to initialize service state")?;
    let router = create_router(state);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Initializes the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,courier_server=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Assembles the application router from the API routes.
fn create_router(state: ServiceState) -> Router {
    let mut api = aide::openapi::OpenApi::default();

    handler::routes()
        .finish_api(&mut api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
