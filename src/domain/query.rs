// src/domain/query.rs

use crate::domain::review::NormalizedReview;
use crate::errors::ServerError;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Optional, independently composable filters. All set filters must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub property: Option<String>,
    pub channel: Option<String>,
    pub min_rating: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Date,
    Rating,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Defaults to newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Rating => "rating",
        }
    }
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Query-string value, with empty strings treated as absent.
fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

impl Filters {
    /// Reads `property`, `channel` and `minRating`.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let min_rating = match param(params, "minRating") {
            None => None,
            Some(raw) => match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => {
                    return Err(ServerError::BadRequest(format!(
                        "minRating must be a number, got {raw:?}"
                    )))
                }
            },
        };

        Ok(Self {
            property: param(params, "property").map(str::to_string),
            channel: param(params, "channel").map(str::to_string),
            min_rating,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.property.is_none() && self.channel.is_none() && self.min_rating.is_none()
    }

    pub fn matches(&self, review: &NormalizedReview) -> bool {
        self.property
            .as_deref()
            .map_or(true, |p| review.property_id == p)
            && self
                .channel
                .as_deref()
                .map_or(true, |c| review.channel == c)
            && self.min_rating.map_or(true, |m| review.average_rating >= m)
    }
}

impl Sort {
    /// Reads `sort` (`date` | `rating`) and `order` (`asc` | `desc`).
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let field = match param(params, "sort") {
            None | Some("date") => SortField::Date,
            Some("rating") => SortField::Rating,
            Some(other) => {
                return Err(ServerError::BadRequest(format!(
                    "sort must be 'date' or 'rating', got {other:?}"
                )))
            }
        };

        let order = match param(params, "order") {
            None | Some("desc") => SortOrder::Desc,
            Some("asc") => SortOrder::Asc,
            Some(other) => {
                return Err(ServerError::BadRequest(format!(
                    "order must be 'asc' or 'desc', got {other:?}"
                )))
            }
        };

        Ok(Self { field, order })
    }

    fn compare(&self, a: &NormalizedReview, b: &NormalizedReview) -> Ordering {
        let ord = match self.field {
            SortField::Date => a.submitted_date.cmp(&b.submitted_date),
            SortField::Rating => a.average_rating.total_cmp(&b.average_rating),
        };

        match self.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

/// Filters then sorts into a new vector. `sort_by` is stable, so reviews
/// with equal keys keep their input order in both directions.
pub fn query(reviews: &[NormalizedReview], filters: &Filters, sort: Sort) -> Vec<NormalizedReview> {
    let mut out: Vec<NormalizedReview> = reviews
        .iter()
        .filter(|r| filters.matches(r))
        .cloned()
        .collect();

    out.sort_by(|a, b| sort.compare(a, b));
    out
}
