//! Database operations for the `ad_trends` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

const TREND_COLUMNS: &str = "id, platform, format, industry, trend_type, trend_name, \
                             trend_score, data, captured_at, is_active";

/// A row from the `ad_trends` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdTrendRow {
    pub id: Uuid,
    pub platform: String,
    pub format: String,
    pub industry: String,
    pub trend_type: String,
    pub trend_name: String,
    pub trend_score: f64,
    /// Open payload: `{"description": ..., "metadata": {...}}`.
    pub data: serde_json::Value,
    pub captured_at: DateTime<Utc>,
    pub is_active: bool,
}

/// A trend staged for insertion. `id` is generated at insert time;
/// `captured_at` and `is_active` come from column defaults.
#[derive(Debug, Clone)]
pub struct NewAdTrend<'a> {
    pub platform: &'a str,
    pub format: &'a str,
    pub industry: &'a str,
    pub trend_type: &'a str,
    pub trend_name: &'a str,
    pub trend_score: f64,
    pub data: serde_json::Value,
}

/// Looks up an active trend by its dedup key (`platform`, `trend_name`).
///
/// There is no unique constraint backing this key; the lookup is the
/// defensive pre-insert check, so concurrent runs can still double-insert.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on database query failure.
pub async fn find_active_trend(
    pool: &PgPool,
    platform: &str,
    trend_name: &str,
) -> Result<Option<AdTrendRow>, DbError> {
    let row = sqlx::query_as::<_, AdTrendRow>(&format!(
        "SELECT {TREND_COLUMNS} FROM ad_trends \
         WHERE platform = $1 AND trend_name = $2 AND is_active = true \
         LIMIT 1"
    ))
    .bind(platform)
    .bind(trend_name)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Inserts a batch of trends in one transaction and returns the created rows
/// with generated fields (`id`, `captured_at`, `is_active`) populated.
///
/// The batch is all-or-nothing: if any insert or the commit fails, no row
/// from the batch is persisted. An empty batch returns an empty `Vec` without
/// opening a transaction.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on insert or commit failure.
pub async fn insert_trends(
    pool: &PgPool,
    staged: &[NewAdTrend<'_>],
) -> Result<Vec<AdTrendRow>, DbError> {
    if staged.is_empty() {
        return Ok(Vec::new());
    }

    let mut tx = pool.begin().await?;
    let mut created = Vec::with_capacity(staged.len());

    for trend in staged {
        let row = sqlx::query_as::<_, AdTrendRow>(&format!(
            "INSERT INTO ad_trends \
               (id, platform, format, industry, trend_type, trend_name, trend_score, data) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {TREND_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(trend.platform)
        .bind(trend.format)
        .bind(trend.industry)
        .bind(trend.trend_type)
        .bind(trend.trend_name)
        .bind(trend.trend_score)
        .bind(trend.data.clone())
        .fetch_one(&mut *tx)
        .await?;
        created.push(row);
    }

    tx.commit().await?;
    Ok(created)
}

/// Inserts a single trend outside any batch (manual creation path).
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on insert failure.
pub async fn create_trend(pool: &PgPool, trend: &NewAdTrend<'_>) -> Result<AdTrendRow, DbError> {
    let row = sqlx::query_as::<_, AdTrendRow>(&format!(
        "INSERT INTO ad_trends \
           (id, platform, format, industry, trend_type, trend_name, trend_score, data) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING {TREND_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(trend.platform)
    .bind(trend.format)
    .bind(trend.industry)
    .bind(trend.trend_type)
    .bind(trend.trend_name)
    .bind(trend.trend_score)
    .bind(trend.data.clone())
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Lists active trends, optionally filtered by industry and/or platform,
/// newest first. `offset`/`limit` page through the result set.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on database query failure.
pub async fn list_trends(
    pool: &PgPool,
    industry: Option<&str>,
    platform: Option<&str>,
    offset: i64,
    limit: i64,
) -> Result<Vec<AdTrendRow>, DbError> {
    let rows = sqlx::query_as::<_, AdTrendRow>(&format!(
        "SELECT {TREND_COLUMNS} FROM ad_trends \
         WHERE is_active = true \
           AND ($1::TEXT IS NULL OR industry = $1) \
           AND ($2::TEXT IS NULL OR platform = $2) \
         ORDER BY captured_at DESC, id \
         OFFSET $3 LIMIT $4"
    ))
    .bind(industry)
    .bind(platform)
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Counts active trends matching the same filters as [`list_trends`].
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on database query failure.
pub async fn count_trends(
    pool: &PgPool,
    industry: Option<&str>,
    platform: Option<&str>,
) -> Result<i64, DbError> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM ad_trends \
         WHERE is_active = true \
           AND ($1::TEXT IS NULL OR industry = $1) \
           AND ($2::TEXT IS NULL OR platform = $2)",
    )
    .bind(industry)
    .bind(platform)
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// Soft-deletes a trend by clearing its `is_active` flag.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no active trend has the given id, or
/// [`DbError::Sqlx`] on query failure.
pub async fn deactivate_trend(pool: &PgPool, id: Uuid) -> Result<(), DbError> {
    let result = sqlx::query("UPDATE ad_trends SET is_active = false WHERE id = $1 AND is_active")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}
