use axum_helpers::{close_postgres, create_cors_layer, create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before anything fallible, so startup errors get colored reports
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState { config, db };

    let cors = create_cors_layer(
        state.config.server.cors_allowed_origins.as_deref(),
        &state.config.environment,
    )?;
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&state), cors);

    // /health reports name and version, /ready probes the database
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        application = %state.config.application.name,
        "Starting store API"
    );

    create_production_app(app, &state.config.server, close_postgres(state.db))
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Store API shutdown complete");
    Ok(())
}
