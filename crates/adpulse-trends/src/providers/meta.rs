//! Meta (Facebook/Instagram) trend provider.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::provider::TrendProvider;
use crate::types::TrendObservation;

/// Trend provider for the Meta ad network.
///
/// Holds an optional Graph API access token. The live creative-insights
/// integration is not wired yet, so credentialed and credential-less runs
/// both serve the curated snapshot below; an absent token must never make
/// the provider fail.
pub struct MetaTrendProvider {
    access_token: Option<String>,
}

impl MetaTrendProvider {
    #[must_use]
    pub fn new(access_token: Option<String>) -> Self {
        Self { access_token }
    }
}

#[async_trait]
impl TrendProvider for MetaTrendProvider {
    fn name(&self) -> &'static str {
        "meta"
    }

    async fn fetch_trends(
        &self,
        industry: &str,
    ) -> Result<Vec<TrendObservation>, ProviderError> {
        if self.access_token.is_some() {
            tracing::debug!(industry, "meta access token present; serving snapshot data");
        }

        Ok(vec![
            TrendObservation {
                platform: "meta".to_string(),
                format: "video".to_string(),
                trend_type: "visual_style".to_string(),
                trend_name: "UGC Testimonial - Split Screen".to_string(),
                description:
                    "High performing format showing product demo on top, reaction on bottom."
                        .to_string(),
                score: 85.5,
                metadata: serde_json::json!({
                    "duration": "15s",
                    "aspect_ratio": "9:16",
                }),
            },
            TrendObservation {
                platform: "meta".to_string(),
                format: "carousel".to_string(),
                trend_type: "copy_angle".to_string(),
                trend_name: "Problem-Agitation-Solution".to_string(),
                description:
                    "Carousel cards walking through pain points before revealing product."
                        .to_string(),
                score: 92.0,
                metadata: serde_json::json!({ "card_count": 5 }),
            },
        ])
    }
}
