// state.rs
use crate::config::Config;
use crate::domain::{normalize_all, NormalizedReview};
use crate::errors::ServerError;
use crate::reviews::{
    bundled_reviews, load_reviews, DataSource, FallbackError, HostawayClient, ReviewSource,
    UpstreamError,
};
use crate::store::{ApprovalStore, MemoryApprovalStore};
use log::info;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Fallback(#[from] FallbackError),
    #[error("could not create review provider: {0}")]
    Provider(#[from] UpstreamError),
}

/// Everything a request handler needs. Built once in `main`.
pub struct AppState {
    pub source: ReviewSource,
    pub approvals: Arc<dyn ApprovalStore>,
}

impl AppState {
    pub fn new(source: ReviewSource, approvals: Arc<dyn ApprovalStore>) -> Self {
        Self { source, approvals }
    }

    pub fn from_config(cfg: &Config) -> Result<Self, StartupError> {
        let fallback = match &cfg.fallback_data {
            Some(path) => load_reviews(path)?,
            None => bundled_reviews()?,
        };
        info!("Loaded {} fallback reviews", fallback.len());

        let source = match &cfg.hostaway_api_key {
            Some(key) => {
                let client = HostawayClient::new(&cfg.hostaway_url, key, cfg.upstream_timeout())?;
                ReviewSource::new(Some(Box::new(client)), fallback)
            }
            None => {
                info!("HOSTAWAY_API_KEY not set, serving fallback data only");
                ReviewSource::fallback_only(fallback)
            }
        };

        Ok(Self::new(source, Arc::new(MemoryApprovalStore::new())))
    }

    /// Fetches and normalizes the current review set.
    pub fn reviews(&self) -> Result<(DataSource, Vec<NormalizedReview>), ServerError> {
        let batch = self.source.fetch();
        let reviews = normalize_all(&batch.reviews)?;
        Ok((batch.source, reviews))
    }
}
