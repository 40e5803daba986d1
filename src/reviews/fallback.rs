// reviews/fallback.rs
use crate::reviews::models::{HostawayResponse, RawReview};
use crate::reviews::FallbackError;
use std::fs;

/// Dataset compiled into the binary, same container shape as the upstream API.
const BUNDLED: &str = include_str!("../../data/mock-reviews.json");

pub fn bundled_reviews() -> Result<Vec<RawReview>, FallbackError> {
    parse(BUNDLED)
}

/// Load a replacement dataset from disk (`--fallback-data`).
pub fn load_reviews(path: &str) -> Result<Vec<RawReview>, FallbackError> {
    let text = fs::read_to_string(path).map_err(|source| FallbackError::Io {
        path: path.to_string(),
        source,
    })?;
    parse(&text)
}

fn parse(text: &str) -> Result<Vec<RawReview>, FallbackError> {
    let data: HostawayResponse = serde_json::from_str(text)?;
    Ok(data.result.unwrap_or_default())
}
