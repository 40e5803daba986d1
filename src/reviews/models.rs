use crate::reviews::UpstreamError;
use serde::{Deserialize, Serialize};

// HostawayResponse
//  ├── status
//  └── result[]
//       ├── id
//       ├── type            guest-to-host | host-to-guest
//       ├── status          published | pending | hidden
//       ├── rating          number | null
//       ├── publicReview
//       ├── reviewCategory[]
//       │    ├── category
//       │    └── rating
//       ├── submittedAt     "2020-08-21 22:45:14"
//       ├── guestName
//       ├── listingName
//       └── channel         optional

#[derive(Debug, Deserialize)]
pub struct HostawayResponse {
    pub status: String,
    pub result: Option<Vec<RawReview>>,
}

impl HostawayResponse {
    /// Reviews from a response the API marked `success`.
    pub fn into_reviews(self) -> Result<Vec<RawReview>, UpstreamError> {
        if self.status != "success" {
            return Err(UpstreamError::Rejected(self.status));
        }
        Ok(self.result.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewType {
    GuestToHost,
    HostToGuest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Published,
    Pending,
    Hidden,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Published => "published",
            ReviewStatus::Pending => "pending",
            ReviewStatus::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewCategory {
    pub category: String,
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReview {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ReviewType,
    pub status: ReviewStatus,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub public_review: String,
    #[serde(default)]
    pub review_category: Vec<ReviewCategory>,
    pub submitted_at: String,
    pub guest_name: String,
    pub listing_name: String,
    #[serde(default)]
    pub channel: Option<String>,
}
