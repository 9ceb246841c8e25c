//! ScaleFlow access API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dev_seed;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use scaleflow_application::AuthorizationService;
use scaleflow_core::AppError;
use scaleflow_infrastructure::InMemoryDirectoryRepository;
use tracing::info;

use crate::api_config::ApiConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    api_config::init_tracing();

    let config = ApiConfig::load()?;
    let repository = Arc::new(InMemoryDirectoryRepository::new());

    if config.dev_seed {
        let demo = dev_seed::run(&repository).await?;
        info!(
            admin_id = %demo.admin_id,
            manager_id = %demo.manager_id,
            scheduler_id = %demo.scheduler_id,
            staff_id = %demo.staff_id,
            coworker_id = %demo.coworker_id,
            template_id = %demo.template_id,
            "demo actors available"
        );
    }

    let app_state = AppState {
        authorization_service: AuthorizationService::new(repository),
        frontend_url: config.frontend_url.clone(),
    };

    let app = api_router::build_router(app_state, &config.frontend_url)?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "scaleflow-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
