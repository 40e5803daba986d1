// src/domain/review.rs

use crate::reviews::{ReviewCategory, ReviewStatus, ReviewType};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A review as the dashboard works with it: the upstream fields plus the
/// values derived by `normalize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedReview {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ReviewType,
    pub status: ReviewStatus,
    pub rating: Option<f64>,
    pub public_review: String,
    pub review_category: Vec<ReviewCategory>,
    pub submitted_at: String,
    pub guest_name: String,
    pub listing_name: String,
    pub channel: String,

    // === Derived ===
    pub average_rating: f64,
    pub submitted_date: DateTime<Utc>,
    pub property_id: String,
}

/// A review plus its curation state, as returned by the list endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView<'a> {
    #[serde(flatten)]
    pub review: &'a NormalizedReview,
    pub is_approved: bool,
}
