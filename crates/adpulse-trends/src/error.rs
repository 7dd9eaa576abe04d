use thiserror::Error;

/// A single provider failed to produce candidates.
///
/// Recovered by the aggregator: logged with the provider's identity and
/// excluded from the run without aborting it.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Connectivity, auth, or rate-limit failure against the backing source.
    #[error("provider integration error: {0}")]
    Integration(String),

    /// A record violated the provider contract (e.g. missing `trend_name`).
    #[error("invalid trend record: {0}")]
    InvalidRecord(String),
}

/// Errors escaping an aggregation run.
///
/// Provider failures never surface here; only storage failures propagate,
/// so a failed commit is visible to the caller rather than silently dropped.
#[derive(Debug, Error)]
pub enum TrendsError {
    #[error("storage error: {0}")]
    Store(#[from] adpulse_db::DbError),
}
