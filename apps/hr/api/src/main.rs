use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use hr_api::{AppState, Config, build_app};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = database::sql::connect_from_config_with_retry(config.database.clone(), None).await?;

    database::sql::run_migrations::<migration::Migrator>(&db, config.app.name).await?;

    let state = AppState { config, db };

    // - /health: liveness check with app name/version
    // - /ready: readiness check against the store
    let app = build_app(&state);

    info!(
        environment = ?state.config.environment,
        "Starting HR API with production-ready shutdown (30s timeout)"
    );

    // Production-ready server with graceful shutdown and cleanup
    let db = state.db.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30), // 30s graceful shutdown timeout
        async move {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("Database connection closed successfully"),
                Err(e) => tracing::error!("Error closing database: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("HR API shutdown complete");
    Ok(())
}
