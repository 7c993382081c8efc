mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    client::hostaway::{HostawayClient, ListingSource},
    config::Config,
    error::AppError,
    scheduler::listing_sync,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let listing_source: Arc<dyn ListingSource> = Arc::new(HostawayClient::new(
        http_client,
        config.hostaway_base_url.clone(),
        config.hostaway_account_id.clone(),
        config.hostaway_api_key.clone(),
    ));

    // Start listing sync scheduler
    let scheduler_db = db.clone();
    let scheduler_source = listing_source.clone();
    let scheduler_cron = config.listing_sync_cron.clone();
    tokio::spawn(async move {
        if let Err(e) =
            listing_sync::start_scheduler(scheduler_db, scheduler_source, &scheduler_cron).await
        {
            tracing::error!("Listing sync scheduler error: {}", e);
        }
    });

    let router = server::router::router().with_state(AppState::new(db, listing_source));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Starting server on port {}", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
