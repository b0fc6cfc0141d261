//! Trending aggregation over recent cached searches.
//!
//! Recomputed on every call; nothing here is cached. The scan is capped at
//! 100 rows, so with heavy traffic this is an approximation of the 7-day
//! window, not an exact census.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;

use crate::constants::cache::TRENDING_TOP_N;
use crate::db::Store;
use crate::entities::gift_searches;
use crate::models::gift::{GiftItem, ProfileData};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingGift {
    #[serde(flatten)]
    pub gift: GiftItem,
    pub trending_score: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingSummary {
    pub gifts: Vec<TrendingGift>,
    pub interests: Vec<String>,
    pub period: String,
    pub sample_size: usize,
}

pub struct TrendingService {
    store: Store,
    window_days: i64,
    sample_limit: u64,
}

impl TrendingService {
    #[must_use]
    pub const fn new(store: Store, window_days: i64, sample_limit: u64) -> Self {
        Self {
            store,
            window_days,
            sample_limit,
        }
    }

    pub async fn compute(&self) -> Result<TrendingSummary> {
        let cutoff = (Utc::now() - chrono::Duration::days(self.window_days)).to_rfc3339();
        let rows = self
            .store
            .recent_searches_since(&cutoff, self.sample_limit)
            .await?;

        Ok(summarize(&rows, self.window_days))
    }
}

/// Frequency-ranks gifts by ASIN and interests by string across the fetched
/// rows. The representative gift snapshot is the first occurrence seen.
/// Ties break on the key so the ranking is deterministic.
fn summarize(rows: &[gift_searches::Model], window_days: i64) -> TrendingSummary {
    let mut gift_counts: HashMap<String, (GiftItem, u64)> = HashMap::new();
    let mut interest_counts: HashMap<String, u64> = HashMap::new();

    for row in rows {
        let gifts: Vec<GiftItem> = serde_json::from_str(&row.gifts).unwrap_or_default();
        for gift in gifts {
            gift_counts
                .entry(gift.asin.clone())
                .and_modify(|(_, count)| *count += 1)
                .or_insert((gift, 1));
        }

        let profile_data: ProfileData = serde_json::from_str(&row.profile_data).unwrap_or_default();
        for interest in profile_data.interests {
            *interest_counts.entry(interest).or_insert(0) += 1;
        }
    }

    let mut ranked_gifts: Vec<(String, (GiftItem, u64))> = gift_counts.into_iter().collect();
    ranked_gifts.sort_by(|(a_asin, (_, a_count)), (b_asin, (_, b_count))| {
        b_count.cmp(a_count).then_with(|| a_asin.cmp(b_asin))
    });

    let gifts = ranked_gifts
        .into_iter()
        .take(TRENDING_TOP_N)
        .map(|(_, (gift, count))| TrendingGift {
            gift,
            trending_score: count,
        })
        .collect();

    let mut ranked_interests: Vec<(String, u64)> = interest_counts.into_iter().collect();
    ranked_interests.sort_by(|(a_name, a_count), (b_name, b_count)| {
        b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
    });

    let interests = ranked_interests
        .into_iter()
        .take(TRENDING_TOP_N)
        .map(|(name, _)| name)
        .collect();

    TrendingSummary {
        gifts,
        interests,
        period: format!("{window_days}_days"),
        sample_size: rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gift(asin: &str, title: &str) -> GiftItem {
        GiftItem {
            title: title.to_string(),
            price: 10.0,
            image: "https://img.example/g.jpg".to_string(),
            reason: "Based on profile interests".to_string(),
            category: None,
            asin: asin.to_string(),
            product_url: format!("https://www.amazon.com/dp/{asin}"),
            checkout_url: "https://checkout.example/orders".to_string(),
            confidence: None,
        }
    }

    fn row(idx: usize, gifts: &[GiftItem], interests: &[&str]) -> gift_searches::Model {
        let profile_data = ProfileData {
            bio: None,
            interests: interests.iter().map(|s| (*s).to_string()).collect(),
            themes: vec![],
        };
        gift_searches::Model {
            id: format!("row-{idx}"),
            platform: "instagram".to_string(),
            username: format!("user{idx}"),
            profile_url: format!("https://instagram.com/user{idx}"),
            profile_data: serde_json::to_string(&profile_data).unwrap(),
            gifts: serde_json::to_string(gifts).unwrap(),
            created_at: "2026-02-10T00:00:00+00:00".to_string(),
            expires_at: "2026-02-11T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_ranking_is_count_descending() {
        let popular = gift("B000000001", "Popular");
        let rare = gift("B000000002", "Rare");

        let rows = vec![
            row(0, &[popular.clone(), rare.clone()], &["coffee", "books"]),
            row(1, &[popular.clone()], &["coffee"]),
            row(2, &[popular.clone()], &["coffee", "travel"]),
        ];

        let summary = summarize(&rows, 7);

        assert_eq!(summary.sample_size, 3);
        assert_eq!(summary.period, "7_days");
        assert_eq!(summary.gifts.len(), 2);
        assert_eq!(summary.gifts[0].gift.asin, "B000000001");
        assert_eq!(summary.gifts[0].trending_score, 3);
        assert_eq!(summary.gifts[1].trending_score, 1);
        assert_eq!(summary.interests[0], "coffee");
    }

    #[test]
    fn test_first_snapshot_is_representative() {
        let first = gift("B000000001", "First Title");
        let mut second = gift("B000000001", "Second Title");
        second.price = 99.0;

        let rows = vec![row(0, &[first], &[]), row(1, &[second], &[])];
        let summary = summarize(&rows, 7);

        assert_eq!(summary.gifts.len(), 1);
        assert_eq!(summary.gifts[0].trending_score, 2);
        assert_eq!(summary.gifts[0].gift.title, "First Title");
    }

    #[test]
    fn test_truncates_to_top_ten() {
        let rows: Vec<gift_searches::Model> = (0..15)
            .map(|i| {
                let g = gift(&format!("B00000{i:04}"), "G");
                row(i as usize, &[g], &[&format!("interest-{i}")])
            })
            .collect();

        let summary = summarize(&rows, 7);

        assert_eq!(summary.gifts.len(), 10);
        assert_eq!(summary.interests.len(), 10);
        assert_eq!(summary.sample_size, 15);
    }

    #[test]
    fn test_ties_break_deterministically() {
        let a = gift("B000000001", "A");
        let b = gift("B000000002", "B");
        let rows = vec![row(0, &[b.clone(), a.clone()], &["zebra", "apple"])];

        let summary = summarize(&rows, 7);

        assert_eq!(summary.gifts[0].gift.asin, "B000000001");
        assert_eq!(summary.gifts[1].gift.asin, "B000000002");
        assert_eq!(summary.interests, vec!["apple", "zebra"]);
    }

    #[test]
    fn test_empty_window() {
        let summary = summarize(&[], 7);
        assert!(summary.gifts.is_empty());
        assert!(summary.interests.is_empty());
        assert_eq!(summary.sample_size, 0);
    }

    #[test]
    fn test_trending_gift_serializes_flat() {
        let entry = TrendingGift {
            gift: gift("B000000001", "G"),
            trending_score: 4,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["asin"], "B000000001");
        assert_eq!(json["trendingScore"], 4);
    }
}
