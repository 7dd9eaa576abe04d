//! Scheduled trend refresh sweep.
//!
//! Runs one aggregation per configured industry on a recurring cron, so the
//! trend store keeps filling without manual `/trends/fetch` calls.

use std::sync::Arc;

use sqlx::PgPool;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use adpulse_core::AppConfig;
use adpulse_trends::{PgTrendStore, TrendAggregator};

/// Register the periodic trend refresh job.
///
/// Runs every 4 hours by default (`0 0 */4 * * *`), overridable with
/// `ADPULSE_TREND_REFRESH_CRON`. When no industries are configured the job
/// is not registered at all.
pub(super) async fn register_trend_refresh_job(
    scheduler: &JobScheduler,
    pool: PgPool,
    config: Arc<AppConfig>,
) -> Result<(), JobSchedulerError> {
    if config.trend_industries.is_empty() {
        tracing::info!("scheduler: no trend industries configured; refresh job not registered");
        return Ok(());
    }

    let cron = config.trend_refresh_cron.clone();
    let industry_count = config.trend_industries.len();
    let pool = Arc::new(pool);

    let job = Job::new_async(cron.as_str(), move |_uuid, _lock| {
        let pool = Arc::clone(&pool);
        let config = Arc::clone(&config);

        Box::pin(async move {
            tracing::info!("scheduler: starting trend refresh sweep");
            run_trend_refresh(&pool, &config).await;
            tracing::info!("scheduler: trend refresh sweep complete");
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(
        cron = %cron,
        industries = industry_count,
        "scheduler: registered trend refresh job"
    );
    Ok(())
}

/// Sweep all configured industries.
///
/// One industry's failure is logged and does not block the rest of the sweep.
async fn run_trend_refresh(pool: &PgPool, config: &AppConfig) {
    for industry in &config.trend_industries {
        let aggregator = TrendAggregator::with_default_providers(
            PgTrendStore::new(pool.clone()),
            config.meta_api_key.clone(),
            config.tiktok_access_token.clone(),
        );

        match aggregator.fetch_and_store_trends(industry).await {
            Ok(created) => {
                tracing::info!(
                    industry,
                    count = created.len(),
                    "scheduler: trend refresh run complete"
                );
            }
            Err(e) => {
                tracing::error!(
                    industry,
                    error = %e,
                    "scheduler: trend refresh run failed"
                );
            }
        }
    }
}
