use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::TrendObservation;

/// A pluggable trend data source.
///
/// The aggregator holds a registered list of these and treats them uniformly;
/// adding a source means implementing this trait, never touching the
/// aggregator. How a provider sources its data (live API, cached snapshot,
/// static catalog) is its own business.
#[async_trait]
pub trait TrendProvider: Send + Sync {
    /// Stable identifier used in logs when this provider fails.
    fn name(&self) -> &'static str;

    /// Fetch candidate trends for an industry.
    ///
    /// "No trends found" is `Ok(vec![])`, never an error. `Err` is reserved
    /// for integration failures (connectivity, auth, rate limits).
    async fn fetch_trends(&self, industry: &str)
        -> Result<Vec<TrendObservation>, ProviderError>;
}
