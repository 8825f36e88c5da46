//! Items API - REST server over an in-memory item catalogue

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::{InMemoryItemRepository, ItemService};
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

    let service = ItemService::new(InMemoryItemRepository::new());

    // Build REST router
    let api_routes = api::routes(service);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);
    let app = router.merge(health_router(config.app));

    info!(
        "Starting {} v{} on port {} ({:?})",
        config.app.name, config.app.version, config.server.port, config.environment
    );

    create_production_app(app, &config.server, async {
        info!("Shutting down: in-memory items are discarded");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
