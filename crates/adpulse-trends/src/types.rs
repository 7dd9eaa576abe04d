use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// A single candidate trend returned by one provider for one industry query.
///
/// Observations are transient: each aggregation run either folds them into a
/// persisted entity or drops them as duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendObservation {
    /// Source network identifier, e.g. `meta` or `tiktok`.
    pub platform: String,
    /// Content format: `video`, `image`, or `carousel`.
    pub format: String,
    /// Category tag: `visual_style`, `audio`, or `copy_angle`.
    pub trend_type: String,
    /// Human-readable label; together with `platform`, the dedup key.
    pub trend_name: String,
    pub description: String,
    pub score: f64,
    /// Provider-specific payload, an open JSON object.
    pub metadata: serde_json::Value,
}

impl TrendObservation {
    /// Checks the provider contract: the dedup key fields must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidRecord`] if `platform` or `trend_name`
    /// is empty.
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.platform.trim().is_empty() {
            return Err(ProviderError::InvalidRecord(
                "missing platform".to_string(),
            ));
        }
        if self.trend_name.trim().is_empty() {
            return Err(ProviderError::InvalidRecord(format!(
                "missing trend_name (platform {})",
                self.platform
            )));
        }
        Ok(())
    }
}
