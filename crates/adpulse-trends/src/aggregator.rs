//! Aggregation run orchestration.

use adpulse_db::AdTrendRow;

use crate::error::TrendsError;
use crate::provider::TrendProvider;
use crate::providers::{MetaTrendProvider, TikTokTrendProvider};
use crate::store::TrendStore;
use crate::types::TrendObservation;

/// Orchestrates one fetch-and-store pass over all registered providers.
///
/// Providers are polled sequentially in registration order so the merged
/// candidate list (and therefore the returned batch) is deterministic.
pub struct TrendAggregator<S> {
    store: S,
    providers: Vec<Box<dyn TrendProvider>>,
}

impl<S: TrendStore> TrendAggregator<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            providers: Vec::new(),
        }
    }

    /// Register a provider. Providers are polled in registration order.
    #[must_use]
    pub fn register(mut self, provider: Box<dyn TrendProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Aggregator wired with the standard provider set (Meta, then TikTok).
    ///
    /// Credentials are passed in explicitly so construction stays free of
    /// ambient environment reads.
    #[must_use]
    pub fn with_default_providers(
        store: S,
        meta_api_key: Option<String>,
        tiktok_access_token: Option<String>,
    ) -> Self {
        Self::new(store)
            .register(Box::new(MetaTrendProvider::new(meta_api_key)))
            .register(Box::new(TikTokTrendProvider::new(tiktok_access_token)))
    }

    /// Run the full pipeline for one industry: fetch from every provider,
    /// drop malformed and already-known candidates, persist the rest in one
    /// transaction, and return only the rows created by this call.
    ///
    /// A provider failure is logged and skipped; it never aborts the run.
    /// If every provider fails (or returns nothing new), the result is an
    /// empty `Vec` and no transaction is opened.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::Store`] if the dedup lookup or the batch commit
    /// fails. A failed commit discards the whole staged batch.
    pub async fn fetch_and_store_trends(
        &self,
        industry: &str,
    ) -> Result<Vec<AdTrendRow>, TrendsError> {
        let mut candidates: Vec<TrendObservation> = Vec::new();

        for provider in &self.providers {
            match provider.fetch_trends(industry).await {
                Ok(results) => {
                    tracing::debug!(
                        provider = provider.name(),
                        industry,
                        count = results.len(),
                        "collected trend candidates"
                    );
                    for observation in results {
                        match observation.validate() {
                            Ok(()) => candidates.push(observation),
                            Err(e) => {
                                tracing::warn!(
                                    provider = provider.name(),
                                    industry,
                                    error = %e,
                                    "dropping malformed trend candidate"
                                );
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        provider = provider.name(),
                        industry,
                        error = %e,
                        "trend fetch failed; continuing with remaining providers"
                    );
                }
            }
        }

        let mut staged: Vec<TrendObservation> = Vec::new();
        for candidate in candidates {
            let existing = self
                .store
                .find_active(&candidate.platform, &candidate.trend_name)
                .await?;
            if existing.is_some() {
                tracing::debug!(
                    platform = %candidate.platform,
                    trend_name = %candidate.trend_name,
                    "trend already captured, skipping"
                );
                continue;
            }
            staged.push(candidate);
        }

        if staged.is_empty() {
            return Ok(Vec::new());
        }

        let created = self.store.insert_batch(industry, &staged).await?;
        tracing::info!(industry, count = created.len(), "persisted new trends");
        Ok(created)
    }
}
