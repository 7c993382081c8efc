use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    client::hostaway::ListingSource, error::AppError, service::listing::ListingService,
};

/// Starts the periodic listing import
///
/// Runs the HostAway import on the given cron schedule. Failures of a scheduled run are
/// logged and the next run proceeds normally.
///
/// # Arguments
/// - `db`: Database connection
/// - `listing_source`: Provider of remote listings
/// - `cron`: Six-field cron expression; an empty string disables the job
pub async fn start_scheduler(
    db: DatabaseConnection,
    listing_source: Arc<dyn ListingSource>,
    cron: &str,
) -> Result<(), AppError> {
    if cron.trim().is_empty() {
        tracing::info!("Listing sync scheduler disabled");
        return Ok(());
    }

    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();
        let listing_source = listing_source.clone();

        Box::pin(async move {
            if let Err(e) = ListingService::new(&db)
                .sync_listings(listing_source.as_ref())
                .await
            {
                tracing::error!("Scheduled listing sync failed: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Listing sync scheduler started ({})", cron);

    Ok(())
}
