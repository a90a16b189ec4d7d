//! LiftPath HTTP server.
//!
//! Thin transport over `liftpath-logic`: the building is generated once and
//! shared read-only across all requests, and every route delegates straight
//! to the logic crate.

pub mod api;
mod args;

use std::sync::Arc;

use liftpath_logic::config::{
    load_config, validate_config, BuildingConfig, ConfigError, LoadConfigError,
};
use liftpath_logic::Building;
use log::{error, info};
use thiserror::Error;

pub use api::build_router;
pub use args::Args;

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    LoadConfig(#[from] LoadConfigError),
    #[error("invalid building config: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Build the shared building from the command-line arguments.
pub fn build_building(args: &Args) -> Result<Arc<Building>, ServerError> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => BuildingConfig::default(),
    };

    let problems = validate_config(&config);
    for problem in &problems {
        error!("Config problem: {problem}");
    }
    let building = Building::new(config)?;

    if !args.lazy {
        building.warm();
    }
    Ok(Arc::new(building))
}

/// Bind and serve until Ctrl-C.
pub async fn run(args: Args) -> Result<(), ServerError> {
    let building = build_building(&args)?;
    let app = build_router(building);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
    }
}
