use async_trait::async_trait;

use adpulse_db::{AdTrendRow, DbError, NewAdTrend};
use sqlx::PgPool;

use crate::types::TrendObservation;

/// Storage capability consumed by the aggregator: the dedup lookup plus the
/// transactional batch insert.
#[async_trait]
pub trait TrendStore: Send + Sync {
    /// Dedup lookup by (`platform`, `trend_name`) against active records.
    async fn find_active(
        &self,
        platform: &str,
        trend_name: &str,
    ) -> Result<Option<AdTrendRow>, DbError>;

    /// Persist all staged observations for `industry` in one transaction and
    /// return the created rows with generated fields populated.
    ///
    /// Must be all-or-nothing: on failure, no row from the batch survives.
    async fn insert_batch(
        &self,
        industry: &str,
        staged: &[TrendObservation],
    ) -> Result<Vec<AdTrendRow>, DbError>;
}

/// Postgres-backed [`TrendStore`] used in production.
pub struct PgTrendStore {
    pool: PgPool,
}

impl PgTrendStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrendStore for PgTrendStore {
    async fn find_active(
        &self,
        platform: &str,
        trend_name: &str,
    ) -> Result<Option<AdTrendRow>, DbError> {
        adpulse_db::find_active_trend(&self.pool, platform, trend_name).await
    }

    async fn insert_batch(
        &self,
        industry: &str,
        staged: &[TrendObservation],
    ) -> Result<Vec<AdTrendRow>, DbError> {
        let rows: Vec<NewAdTrend<'_>> = staged
            .iter()
            .map(|obs| NewAdTrend {
                platform: &obs.platform,
                format: &obs.format,
                industry,
                trend_type: &obs.trend_type,
                trend_name: &obs.trend_name,
                trend_score: obs.score,
                // Description and provider metadata travel in the open payload.
                data: serde_json::json!({
                    "description": obs.description,
                    "metadata": obs.metadata,
                }),
            })
            .collect();

        adpulse_db::insert_trends(&self.pool, &rows).await
    }
}
