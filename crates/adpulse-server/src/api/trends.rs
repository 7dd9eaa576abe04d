use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adpulse_db::{AdTrendRow, NewAdTrend};
use adpulse_trends::{PgTrendStore, TrendAggregator, TrendsError};

use crate::middleware::RequestId;

use super::{map_db_error, normalize_limit, normalize_skip, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct TrendsQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub industry: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FetchQuery {
    pub industry: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AdTrendCreate {
    pub platform: String,
    pub format: String,
    pub industry: String,
    pub trend_type: String,
    pub trend_name: String,
    pub trend_score: f64,
    pub data: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub(super) struct AdTrendResponse {
    pub(super) id: Uuid,
    pub(super) platform: String,
    pub(super) format: String,
    pub(super) industry: String,
    pub(super) trend_type: String,
    pub(super) trend_name: String,
    pub(super) trend_score: f64,
    pub(super) data: serde_json::Value,
    pub(super) captured_at: DateTime<Utc>,
    pub(super) is_active: bool,
}

impl From<AdTrendRow> for AdTrendResponse {
    fn from(row: AdTrendRow) -> Self {
        Self {
            id: row.id,
            platform: row.platform,
            format: row.format,
            industry: row.industry,
            trend_type: row.trend_type,
            trend_name: row.trend_name,
            trend_score: row.trend_score,
            data: row.data,
            captured_at: row.captured_at,
            is_active: row.is_active,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct PaginatedTrends {
    pub(super) results: Vec<AdTrendResponse>,
    pub(super) count: i64,
    pub(super) next: Option<String>,
    pub(super) previous: Option<String>,
}

pub(super) async fn list_trends(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<TrendsQuery>,
) -> Result<Json<PaginatedTrends>, ApiError> {
    let skip = normalize_skip(query.skip);
    let limit = normalize_limit(query.limit);
    let industry = query.industry.as_deref();
    let platform = query.platform.as_deref();

    let rows = adpulse_db::list_trends(&state.pool, industry, platform, skip, limit)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
    let count = adpulse_db::count_trends(&state.pool, industry, platform)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let next = (skip + limit < count).then(|| page_url(skip + limit, limit, industry, platform));
    let previous = (skip > 0).then(|| page_url((skip - limit).max(0), limit, industry, platform));

    Ok(Json(PaginatedTrends {
        results: rows.into_iter().map(AdTrendResponse::from).collect(),
        count,
        next,
        previous,
    }))
}

pub(super) async fn fetch_trends(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<FetchQuery>,
) -> Result<Json<Vec<AdTrendResponse>>, ApiError> {
    let industry = query
        .industry
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "validation_error",
                "industry query parameter is required",
            )
        })?;

    let aggregator = TrendAggregator::with_default_providers(
        PgTrendStore::new(state.pool.clone()),
        state.config.meta_api_key.clone(),
        state.config.tiktok_access_token.clone(),
    );

    let created = aggregator
        .fetch_and_store_trends(industry)
        .await
        .map_err(|e| map_trends_error(req_id.0.clone(), &e))?;

    Ok(Json(created.into_iter().map(AdTrendResponse::from).collect()))
}

pub(super) async fn create_trend(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(payload): Json<AdTrendCreate>,
) -> Result<Json<AdTrendResponse>, ApiError> {
    if payload.platform.trim().is_empty() || payload.trend_name.trim().is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "platform and trend_name are required",
        ));
    }

    let row = adpulse_db::create_trend(
        &state.pool,
        &NewAdTrend {
            platform: &payload.platform,
            format: &payload.format,
            industry: &payload.industry,
            trend_type: &payload.trend_type,
            trend_name: &payload.trend_name,
            trend_score: payload.trend_score,
            data: payload.data.clone(),
        },
    )
    .await
    .map_err(|e| map_db_error(req_id.0, &e))?;

    Ok(Json(row.into()))
}

fn map_trends_error(request_id: String, error: &TrendsError) -> ApiError {
    tracing::error!(error = %error, "trend aggregation failed");
    ApiError::new(request_id, "internal_error", "trend aggregation failed")
}

fn page_url(skip: i64, limit: i64, industry: Option<&str>, platform: Option<&str>) -> String {
    let mut url = format!("/api/v1/trends?skip={skip}&limit={limit}");
    if let Some(industry) = industry {
        let encoded = utf8_percent_encode(industry, NON_ALPHANUMERIC);
        url.push_str(&format!("&industry={encoded}"));
    }
    if let Some(platform) = platform {
        let encoded = utf8_percent_encode(platform, NON_ALPHANUMERIC);
        url.push_str(&format!("&platform={encoded}"));
    }
    url
}
