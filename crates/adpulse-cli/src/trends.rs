use adpulse_core::AppConfig;
use adpulse_trends::{PgTrendStore, TrendAggregator};

/// Run one aggregation pass for an industry and print the new trends.
///
/// # Errors
///
/// Returns an error if the dedup lookup or the batch commit fails. Provider
/// failures are logged by the aggregator and do not fail the command.
pub(crate) async fn run_trends_fetch(
    pool: &sqlx::PgPool,
    config: &AppConfig,
    industry: &str,
) -> anyhow::Result<()> {
    let aggregator = TrendAggregator::with_default_providers(
        PgTrendStore::new(pool.clone()),
        config.meta_api_key.clone(),
        config.tiktok_access_token.clone(),
    );

    let created = aggregator.fetch_and_store_trends(industry).await?;

    if created.is_empty() {
        println!("no new trends for industry '{industry}'");
        return Ok(());
    }

    println!("captured {} new trend(s) for '{industry}':", created.len());
    for trend in &created {
        println!(
            "  [{:<7}] {:<6.1} {} ({})",
            trend.platform, trend.trend_score, trend.trend_name, trend.trend_type
        );
    }

    Ok(())
}

/// List captured trends, optionally filtered by industry and/or platform.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub(crate) async fn run_trends_list(
    pool: &sqlx::PgPool,
    industry: Option<&str>,
    platform: Option<&str>,
    limit: i64,
) -> anyhow::Result<()> {
    let trends = adpulse_db::list_trends(pool, industry, platform, 0, limit).await?;

    if trends.is_empty() {
        println!("no trends found; run `trends fetch` first");
        return Ok(());
    }

    let header = format!(
        "{:<9}{:<13}{:<14}{:<8}CAPTURED             NAME",
        "PLATFORM", "INDUSTRY", "TYPE", "SCORE"
    );
    println!("{header}");
    for trend in &trends {
        println!(
            "{:<9}{:<13}{:<14}{:<8.1}{}  {}",
            trend.platform,
            trend.industry,
            trend.trend_type,
            trend.trend_score,
            trend.captured_at.format("%Y-%m-%d %H:%M UTC"),
            trend.trend_name
        );
    }

    Ok(())
}
