//! TikTok trend provider.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::provider::TrendProvider;
use crate::types::TrendObservation;

/// Trend provider for the TikTok ad network.
///
/// Same contract as [`crate::providers::MetaTrendProvider`]: the optional
/// access token gates a future live integration; both paths currently serve
/// the curated snapshot.
pub struct TikTokTrendProvider {
    access_token: Option<String>,
}

impl TikTokTrendProvider {
    #[must_use]
    pub fn new(access_token: Option<String>) -> Self {
        Self { access_token }
    }
}

#[async_trait]
impl TrendProvider for TikTokTrendProvider {
    fn name(&self) -> &'static str {
        "tiktok"
    }

    async fn fetch_trends(
        &self,
        industry: &str,
    ) -> Result<Vec<TrendObservation>, ProviderError> {
        if self.access_token.is_some() {
            tracing::debug!(industry, "tiktok access token present; serving snapshot data");
        }

        Ok(vec![
            TrendObservation {
                platform: "tiktok".to_string(),
                format: "video".to_string(),
                trend_type: "audio".to_string(),
                trend_name: "Trending Sound: 'Wait for it...'".to_string(),
                description: "Videos using suspenseful audio to reveal results.".to_string(),
                score: 95.0,
                metadata: serde_json::json!({
                    "sound_id": "123456789",
                    "viral_coefficient": "High",
                }),
            },
            TrendObservation {
                platform: "tiktok".to_string(),
                format: "video".to_string(),
                trend_type: "visual_style".to_string(),
                trend_name: "Green Screen Commentary".to_string(),
                description: "Creator commenting over news article or product page.".to_string(),
                score: 88.5,
                metadata: serde_json::json!({ "creator_type": "Expert" }),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn snapshot_records_pass_contract_validation() {
        let provider = TikTokTrendProvider::new(None);
        let trends = provider
            .fetch_trends("ecommerce")
            .await
            .expect("snapshot fetch should not fail");

        assert_eq!(trends.len(), 2);
        for trend in &trends {
            assert_eq!(trend.platform, "tiktok");
            trend.validate().expect("snapshot records must be valid");
        }
        assert_eq!(trends[0].trend_type, "audio");
        assert_eq!(trends[1].trend_name, "Green Screen Commentary");
    }
}
