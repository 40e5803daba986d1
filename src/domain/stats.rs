// src/domain/stats.rs

use crate::domain::review::NormalizedReview;
use serde::Serialize;
use std::collections::BTreeMap;

/// Share of the newest reviews that counts as "recent" (one third, rounded up).
const RECENT_DIVISOR: usize = 3;
/// Minimum gap between recent and older means before a trend is reported.
const TREND_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyStatsEntry {
    pub property_name: String,
    pub property_id: String,
    pub total_reviews: usize,
    pub avg_rating: f64,
    pub trend: Trend,
    pub channel_breakdown: BTreeMap<String, usize>,
    pub category_averages: BTreeMap<String, f64>,
}

/// Overall score and per-category means for a set of reviews.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub count: usize,
    pub average: f64,
    pub categories: BTreeMap<String, f64>,
}

/// One entry per distinct listing name, in order of first appearance.
pub fn aggregate(reviews: &[NormalizedReview]) -> Vec<PropertyStatsEntry> {
    let mut names: Vec<&str> = Vec::new();
    for r in reviews {
        if !names.contains(&r.listing_name.as_str()) {
            names.push(&r.listing_name);
        }
    }

    names
        .into_iter()
        .map(|name| {
            let group: Vec<&NormalizedReview> =
                reviews.iter().filter(|r| r.listing_name == name).collect();
            property_stats(name, &group)
        })
        .collect()
}

fn property_stats(name: &str, group: &[&NormalizedReview]) -> PropertyStatsEntry {
    let avg_rating = mean(group.iter().map(|r| r.average_rating)).unwrap_or(0.0);

    let mut channel_breakdown = BTreeMap::new();
    for r in group {
        *channel_breakdown.entry(r.channel.clone()).or_insert(0) += 1;
    }

    PropertyStatsEntry {
        property_name: name.to_string(),
        property_id: group
            .first()
            .map(|r| r.property_id.clone())
            .unwrap_or_default(),
        total_reviews: group.len(),
        avg_rating,
        trend: trend(group, avg_rating),
        channel_breakdown,
        category_averages: category_averages(group.iter().copied()),
    }
}

/// Compares the newest third of the reviews against the rest.
pub fn trend(group: &[&NormalizedReview], avg_rating: f64) -> Trend {
    let mut by_date: Vec<&NormalizedReview> = group.to_vec();
    by_date.sort_by(|a, b| b.submitted_date.cmp(&a.submitted_date));

    let split = by_date.len().div_ceil(RECENT_DIVISOR);
    let (recent, older) = by_date.split_at(split);

    let recent_avg = mean(recent.iter().map(|r| r.average_rating)).unwrap_or(avg_rating);
    let older_avg = mean(older.iter().map(|r| r.average_rating)).unwrap_or(avg_rating);

    if recent_avg > older_avg + TREND_THRESHOLD {
        Trend::Up
    } else if recent_avg < older_avg - TREND_THRESHOLD {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// Mean score per category across the given reviews, unscored entries skipped.
pub fn category_averages<'a>(
    reviews: impl IntoIterator<Item = &'a NormalizedReview>,
) -> BTreeMap<String, f64> {
    let mut scores: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for r in reviews {
        for cat in &r.review_category {
            if let Some(rating) = cat.rating {
                scores.entry(cat.category.clone()).or_default().push(rating);
            }
        }
    }

    scores
        .into_iter()
        .filter_map(|(category, values)| mean(values.into_iter()).map(|m| (category, m)))
        .collect()
}

pub fn summarize(reviews: &[NormalizedReview]) -> RatingSummary {
    RatingSummary {
        count: reviews.len(),
        average: mean(reviews.iter().map(|r| r.average_rating)).unwrap_or(0.0),
        categories: category_averages(reviews),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}
