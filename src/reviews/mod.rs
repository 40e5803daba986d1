mod fallback;
pub mod models;
mod source;
mod source_error;

pub use fallback::{bundled_reviews, load_reviews};
pub use models::{RawReview, ReviewCategory, ReviewStatus, ReviewType};
pub use source::{DataSource, HostawayClient, ReviewProvider, ReviewSource};
pub use source_error::{FallbackError, UpstreamError};
