// reviews/source.rs
use crate::reviews::models::{HostawayResponse, RawReview};
use crate::reviews::UpstreamError;
use log::{info, warn};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("review-dashboard/", env!("CARGO_PKG_VERSION"));

/// Anything that can hand back raw reviews from a live system.
pub trait ReviewProvider: Send + Sync {
    fn fetch_reviews(&self) -> Result<Vec<RawReview>, UpstreamError>;
}

pub struct HostawayClient {
    client: Client,
    url: String,
    api_key: String,
}

impl HostawayClient {
    pub fn new(url: &str, api_key: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

impl ReviewProvider for HostawayClient {
    fn fetch_reviews(&self) -> Result<Vec<RawReview>, UpstreamError> {
        let resp = self
            .client
            .get(&self.url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let data: HostawayResponse = resp
            .json()
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        data.into_reviews()
    }
}

/// Where a batch of reviews came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct SourcedReviews {
    pub source: DataSource,
    pub reviews: Vec<RawReview>,
}

/// Live provider with a static fallback. `fetch` never fails.
pub struct ReviewSource {
    provider: Option<Box<dyn ReviewProvider>>,
    fallback: Vec<RawReview>,
}

impl ReviewSource {
    pub fn new(provider: Option<Box<dyn ReviewProvider>>, fallback: Vec<RawReview>) -> Self {
        Self { provider, fallback }
    }

    /// A source that only ever serves the given dataset.
    pub fn fallback_only(fallback: Vec<RawReview>) -> Self {
        Self::new(None, fallback)
    }

    pub fn fetch(&self) -> SourcedReviews {
        let Some(provider) = &self.provider else {
            info!("No review provider configured, using fallback data");
            return self.fallback();
        };

        match provider.fetch_reviews() {
            Ok(reviews) if !reviews.is_empty() => SourcedReviews {
                source: DataSource::Live,
                reviews,
            },
            Ok(_) => {
                warn!("Review provider returned no reviews, using fallback data");
                self.fallback()
            }
            Err(e) => {
                warn!("Review provider unavailable ({e}), using fallback data");
                self.fallback()
            }
        }
    }

    fn fallback(&self) -> SourcedReviews {
        SourcedReviews {
            source: DataSource::Fallback,
            reviews: self.fallback.clone(),
        }
    }
}
