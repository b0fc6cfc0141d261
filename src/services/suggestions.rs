//! Per-request suggestion workflow: cache lookup, upstream call on a miss,
//! transform, persist, respond.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::clients::purch::{GiftProvider, ProviderError};
use crate::db::{NewGiftSearch, Store};
use crate::entities::gift_searches;
use crate::models::gift::{GiftItem, Platform, ProfileData};
use crate::services::transform::transform_gifts;

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Upstream answered 2xx but flagged the analysis as failed.
    #[error("Gift provider could not analyze the profile")]
    AnalysisFailed,

    #[error("Cache store failure: {0}")]
    Store(#[source] anyhow::Error),
}

/// The successful envelope, cache hit or not.
#[derive(Debug, Clone)]
pub struct SuggestionOutcome {
    pub username: String,
    pub profile_pic_url: Option<String>,
    pub gifts: Vec<GiftItem>,
    pub interests: Vec<String>,
    pub themes: Vec<String>,
    pub cached: bool,
}

pub struct SuggestionService {
    store: Store,
    provider: Arc<dyn GiftProvider>,
    ttl: chrono::Duration,
}

impl SuggestionService {
    #[must_use]
    pub fn new(store: Store, provider: Arc<dyn GiftProvider>, ttl_hours: i64) -> Self {
        Self {
            store,
            provider,
            ttl: chrono::Duration::hours(ttl_hours),
        }
    }

    /// Cache check first; a fresh row answers immediately without touching
    /// the upstream. On a miss or stale row: one upstream attempt, transform,
    /// persist with a fresh 24h expiry, then respond. The persist happens
    /// before the response; if it fails the whole request fails, there is no
    /// serve-but-don't-cache path.
    pub async fn suggest(
        &self,
        profile_url: &str,
        platform: Platform,
    ) -> Result<SuggestionOutcome, SuggestionError> {
        let now = Utc::now();

        let cached = self
            .store
            .find_cached_search(profile_url, platform)
            .await
            .map_err(SuggestionError::Store)?;

        if let Some(row) = cached {
            if is_fresh(&row, now) {
                info!(%platform, profile_url, "Serving gift suggestions from cache");
                return Ok(outcome_from_row(&row));
            }
            info!(%platform, profile_url, "Cached suggestions expired, refreshing");
        }

        let response = self.provider.fetch_suggestions(profile_url, platform).await?;

        if !response.success {
            warn!(%platform, profile_url, "Purch backend reported a failed analysis");
            return Err(SuggestionError::AnalysisFailed);
        }

        let gifts = transform_gifts(&response.gifts);
        let profile_data = response.profile_data.unwrap_or_default();

        self.store
            .record_search(NewGiftSearch {
                platform,
                username: response.username.clone(),
                profile_url: profile_url.to_string(),
                profile_data: profile_data.clone(),
                gifts: gifts.clone(),
                created_at: now,
                expires_at: now + self.ttl,
            })
            .await
            .map_err(SuggestionError::Store)?;

        Ok(SuggestionOutcome {
            username: response.username,
            profile_pic_url: response.profile_pic_url,
            gifts,
            interests: profile_data.interests,
            themes: profile_data.themes,
            cached: false,
        })
    }
}

/// Fresh means `expires_at` is strictly in the future. An unparseable
/// timestamp counts as stale and falls through to the upstream.
fn is_fresh(row: &gift_searches::Model, now: DateTime<Utc>) -> bool {
    DateTime::parse_from_rfc3339(&row.expires_at)
        .map(|expires| expires.with_timezone(&Utc) > now)
        .unwrap_or(false)
}

fn outcome_from_row(row: &gift_searches::Model) -> SuggestionOutcome {
    let gifts: Vec<GiftItem> = serde_json::from_str(&row.gifts).unwrap_or_default();
    let profile_data: ProfileData = serde_json::from_str(&row.profile_data).unwrap_or_default();

    SuggestionOutcome {
        username: row.username.clone(),
        profile_pic_url: None,
        gifts,
        interests: profile_data.interests,
        themes: profile_data.themes,
        cached: true,
    }
}
