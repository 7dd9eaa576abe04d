//! Background job scheduler.
//!
//! Initialises a [`JobScheduler`] at server startup and registers the
//! periodic trend refresh sweep.

mod trends;

use std::sync::Arc;

use sqlx::PgPool;
use tokio_cron_scheduler::{JobScheduler, JobSchedulerError};

use adpulse_core::AppConfig;

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive for
/// the lifetime of the process. Dropping it shuts down all scheduled jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised or
/// started.
pub async fn build_scheduler(
    pool: PgPool,
    config: Arc<AppConfig>,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;
    trends::register_trend_refresh_job(&scheduler, pool, config).await?;
    scheduler.start().await?;
    Ok(scheduler)
}
