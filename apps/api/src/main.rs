//! Larder API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dev_seed;
mod dto;
mod error;
mod handlers;
mod state;

use larder_core::AppError;
use tracing::{info, warn};

use crate::api_config::{ApiCommand, ApiConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    if config.command == ApiCommand::Migrate && config.database_url.is_none() {
        return Err(AppError::Validation(
            "DATABASE_URL is required to run migrations".to_owned(),
        ));
    }

    let pool = match config.database_url.as_deref() {
        Some(database_url) => Some(
            api_services::connect_and_migrate(database_url, config.database_max_connections)
                .await?,
        ),
        None => {
            warn!("DATABASE_URL is not set, catalog data will be kept in memory");
            None
        }
    };

    if config.command == ApiCommand::Migrate {
        info!("database migrations applied successfully");
        return Ok(());
    }

    let app_state = api_services::build_app_state(pool);

    if config.command == ApiCommand::Seed {
        dev_seed::run(&app_state).await?;
        return Ok(());
    }

    let app = api_router::build_router(app_state, &config.frontend_url)?;
    let address = config.socket_address()?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "larder-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
