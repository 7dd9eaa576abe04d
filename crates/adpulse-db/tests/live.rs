//! Live integration tests for adpulse-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/adpulse-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory.

use adpulse_db::{
    count_trends, create_trend, deactivate_trend, find_active_trend, insert_trends, list_trends,
    NewAdTrend,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn staged_trend<'a>(
    platform: &'a str,
    trend_name: &'a str,
    industry: &'a str,
    score: f64,
) -> NewAdTrend<'a> {
    NewAdTrend {
        platform,
        format: "video",
        industry,
        trend_type: "visual_style",
        trend_name,
        trend_score: score,
        data: serde_json::json!({
            "description": format!("description for {trend_name}"),
            "metadata": {"aspect_ratio": "9:16"},
        }),
    }
}

// ---------------------------------------------------------------------------
// Section 1: Batch insert and refresh
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn insert_trends_returns_rows_with_generated_fields(pool: sqlx::PgPool) {
    let staged = vec![
        staged_trend("meta", "UGC Split Screen", "ecommerce", 85.5),
        staged_trend("tiktok", "Green Screen Commentary", "ecommerce", 88.5),
    ];

    let created = insert_trends(&pool, &staged)
        .await
        .expect("insert_trends failed");

    assert_eq!(created.len(), 2);
    for row in &created {
        assert_eq!(row.industry, "ecommerce");
        assert!(row.is_active, "new trends default to active");
        assert!(!row.id.is_nil(), "id should be generated");
    }
    assert_eq!(created[0].platform, "meta");
    assert_eq!(created[1].platform, "tiktok");
    assert_ne!(created[0].id, created[1].id);
}

#[sqlx::test(migrations = "../../migrations")]
async fn insert_trends_empty_batch_is_a_no_op(pool: sqlx::PgPool) {
    let created = insert_trends(&pool, &[])
        .await
        .expect("empty batch should succeed");
    assert!(created.is_empty());

    let total = count_trends(&pool, None, None).await.expect("count failed");
    assert_eq!(total, 0);
}

// ---------------------------------------------------------------------------
// Section 2: Dedup lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn find_active_trend_matches_on_platform_and_name(pool: sqlx::PgPool) {
    insert_trends(&pool, &[staged_trend("meta", "Hook Stack", "saas", 70.0)])
        .await
        .expect("seed insert failed");

    let found = find_active_trend(&pool, "meta", "Hook Stack")
        .await
        .expect("lookup failed");
    assert!(found.is_some(), "expected a dedup hit");

    let miss = find_active_trend(&pool, "tiktok", "Hook Stack")
        .await
        .expect("lookup failed");
    assert!(miss.is_none(), "same name on another platform is not a hit");

    let miss = find_active_trend(&pool, "meta", "Other Trend")
        .await
        .expect("lookup failed");
    assert!(miss.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn find_active_trend_ignores_deactivated_rows(pool: sqlx::PgPool) {
    let created = insert_trends(&pool, &[staged_trend("meta", "Retired Trend", "saas", 50.0)])
        .await
        .expect("seed insert failed");

    deactivate_trend(&pool, created[0].id)
        .await
        .expect("deactivate failed");

    let found = find_active_trend(&pool, "meta", "Retired Trend")
        .await
        .expect("lookup failed");
    assert!(found.is_none(), "deactivated trends must not block re-capture");
}

// ---------------------------------------------------------------------------
// Section 3: Listing, counting, lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn list_trends_filters_by_industry_and_platform(pool: sqlx::PgPool) {
    insert_trends(
        &pool,
        &[
            staged_trend("meta", "A", "ecommerce", 1.0),
            staged_trend("meta", "B", "saas", 2.0),
            staged_trend("tiktok", "C", "ecommerce", 3.0),
        ],
    )
    .await
    .expect("seed insert failed");

    let ecommerce = list_trends(&pool, Some("ecommerce"), None, 0, 50)
        .await
        .expect("list failed");
    assert_eq!(ecommerce.len(), 2);
    assert!(ecommerce.iter().all(|t| t.industry == "ecommerce"));

    let meta_ecommerce = list_trends(&pool, Some("ecommerce"), Some("meta"), 0, 50)
        .await
        .expect("list failed");
    assert_eq!(meta_ecommerce.len(), 1);
    assert_eq!(meta_ecommerce[0].trend_name, "A");

    let all = list_trends(&pool, None, None, 0, 50).await.expect("list failed");
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_trends_pages_with_offset_and_limit(pool: sqlx::PgPool) {
    insert_trends(
        &pool,
        &[
            staged_trend("meta", "A", "fitness", 1.0),
            staged_trend("meta", "B", "fitness", 2.0),
            staged_trend("meta", "C", "fitness", 3.0),
        ],
    )
    .await
    .expect("seed insert failed");

    let page1 = list_trends(&pool, Some("fitness"), None, 0, 2)
        .await
        .expect("list failed");
    let page2 = list_trends(&pool, Some("fitness"), None, 2, 2)
        .await
        .expect("list failed");

    assert_eq!(page1.len(), 2);
    assert_eq!(page2.len(), 1);

    let mut seen: Vec<_> = page1.iter().chain(page2.iter()).map(|t| t.id).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 3, "pages must not overlap");
}

#[sqlx::test(migrations = "../../migrations")]
async fn count_trends_applies_filters(pool: sqlx::PgPool) {
    insert_trends(
        &pool,
        &[
            staged_trend("meta", "A", "ecommerce", 1.0),
            staged_trend("tiktok", "B", "ecommerce", 2.0),
        ],
    )
    .await
    .expect("seed insert failed");

    assert_eq!(count_trends(&pool, None, None).await.unwrap(), 2);
    assert_eq!(
        count_trends(&pool, Some("ecommerce"), Some("tiktok"))
            .await
            .unwrap(),
        1
    );
    assert_eq!(count_trends(&pool, Some("travel"), None).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_trend_inserts_single_row(pool: sqlx::PgPool) {
    let row = create_trend(&pool, &staged_trend("meta", "Manual Entry", "saas", 60.0))
        .await
        .expect("create_trend failed");

    assert_eq!(row.trend_name, "Manual Entry");
    assert!(row.is_active);

    let total = count_trends(&pool, None, None).await.unwrap();
    assert_eq!(total, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn deactivate_trend_unknown_id_is_not_found(pool: sqlx::PgPool) {
    let result = deactivate_trend(&pool, uuid::Uuid::new_v4()).await;
    assert!(
        matches!(result, Err(adpulse_db::DbError::NotFound)),
        "expected NotFound, got: {result:?}"
    );
}
