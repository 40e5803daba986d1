// src/domain/normalize.rs

use crate::domain::review::NormalizedReview;
use crate::reviews::{RawReview, ReviewCategory};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Channel label for reviews that arrive without one.
pub const DEFAULT_CHANNEL: &str = "Hostaway";

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("review {id}: unparsable submittedAt {value:?}")]
    InvalidTimestamp { id: i64, value: String },
}

pub fn normalize(raw: &RawReview) -> Result<NormalizedReview, NormalizeError> {
    let submitted_date =
        parse_submitted_at(&raw.submitted_at).ok_or_else(|| NormalizeError::InvalidTimestamp {
            id: raw.id,
            value: raw.submitted_at.clone(),
        })?;

    let channel = raw
        .channel
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CHANNEL)
        .to_string();

    Ok(NormalizedReview {
        id: raw.id,
        kind: raw.kind,
        status: raw.status,
        rating: raw.rating,
        public_review: raw.public_review.clone(),
        review_category: raw.review_category.clone(),
        submitted_at: raw.submitted_at.clone(),
        guest_name: raw.guest_name.clone(),
        listing_name: raw.listing_name.clone(),
        channel,
        average_rating: average_rating(raw.rating, &raw.review_category),
        submitted_date,
        property_id: property_id(&raw.listing_name),
    })
}

/// Normalizes every record, stopping at the first invalid one.
pub fn normalize_all(raws: &[RawReview]) -> Result<Vec<NormalizedReview>, NormalizeError> {
    raws.iter().map(normalize).collect()
}

/// Overall rating if the guest gave one, otherwise the mean of the category
/// scores. Categories without a score are left out of the mean.
pub fn average_rating(rating: Option<f64>, categories: &[ReviewCategory]) -> f64 {
    if let Some(r) = rating {
        return round1(r);
    }

    let scores: Vec<f64> = categories.iter().filter_map(|c| c.rating).collect();
    if scores.is_empty() {
        return 0.0;
    }

    round1(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// First two whitespace-separated tokens of the listing name joined by `-`.
/// A missing token counts as the empty string.
pub fn property_id(listing_name: &str) -> String {
    let mut tokens = listing_name.split_whitespace();
    let first = tokens.next().unwrap_or("");
    let second = tokens.next().unwrap_or("");
    format!("{first}-{second}")
}

pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn parse_submitted_at(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    // Hostaway sends "2020-08-21 22:45:14" without an offset; read offset-less
    // timestamps as UTC.
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
