//! Products API - REST server

use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");

    // An unreachable store at boot is a hard failure: exit with an error
    // instead of serving requests that can only answer 500.
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await?;

    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name).await?;

    // Build REST router; health and readiness live outside the /api nest
    let api_routes = api::routes(db.clone());
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(config.app))
        .merge(api::health::ready_router(db));

    info!("Starting Products API on port {}", config.server.port);

    create_app(app, &config.server).await?;

    info!("Products API shutdown complete");
    Ok(())
}
