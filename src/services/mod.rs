pub mod suggestions;
pub mod transform;
pub mod trending;

pub use suggestions::{SuggestionError, SuggestionOutcome, SuggestionService};
pub use trending::{TrendingGift, TrendingService, TrendingSummary};
