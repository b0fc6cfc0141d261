use serde::{Deserialize, Serialize};

use crate::models::gift::{GiftItem, Platform};
use crate::services::suggestions::SuggestionOutcome;
use crate::services::trending::TrendingSummary;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    pub profile_url: String,
    pub platform: Platform,
}

/// Flat success envelope for `POST /gifts/suggest`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    pub success: bool,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
    pub gifts: Vec<GiftItem>,
    pub interests: Vec<String>,
    pub themes: Vec<String>,
    pub cached: bool,
}

impl From<SuggestionOutcome> for SuggestResponse {
    fn from(outcome: SuggestionOutcome) -> Self {
        Self {
            success: true,
            username: outcome.username,
            profile_pic_url: outcome.profile_pic_url,
            gifts: outcome.gifts,
            interests: outcome.interests,
            themes: outcome.themes,
            cached: outcome.cached,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrendingResponse {
    pub success: bool,
    pub trending: TrendingSummary,
    pub cached: bool,
}

impl TrendingResponse {
    #[must_use]
    pub const fn new(trending: TrendingSummary) -> Self {
        Self {
            success: true,
            trending,
            cached: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
