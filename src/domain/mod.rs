pub mod normalize;
pub mod query;
pub mod review;
pub mod stats;

pub use normalize::normalize_all;
pub use query::{query, Filters, Sort, SortField, SortOrder};
pub use review::{NormalizedReview, ReviewView};
pub use stats::{aggregate, summarize, PropertyStatsEntry, RatingSummary, Trend};
