use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::{gift_searches, prelude::*};
use crate::models::gift::{GiftItem, Platform, ProfileData};

/// Fields for a new cache row; the repository owns id assignment and the
/// JSON encoding of the structured columns.
#[derive(Debug, Clone)]
pub struct NewGiftSearch {
    pub platform: Platform,
    pub username: String,
    pub profile_url: String,
    pub profile_data: ProfileData,
    pub gifts: Vec<GiftItem>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

pub struct SearchRepository {
    conn: DatabaseConnection,
}

impl SearchRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Most recent row for (profile_url, platform), fresh or not. The store
    /// does not filter on expiry; the workflow checks `expires_at` itself.
    pub async fn find_cached(
        &self,
        profile_url: &str,
        platform: Platform,
    ) -> Result<Option<gift_searches::Model>> {
        let row = GiftSearches::find()
            .filter(gift_searches::Column::ProfileUrl.eq(profile_url))
            .filter(gift_searches::Column::Platform.eq(platform.as_str()))
            .order_by_desc(gift_searches::Column::CreatedAt)
            .one(&self.conn)
            .await?;

        Ok(row)
    }

    /// Appends a row. Never updates; a refresh after expiry simply inserts
    /// a newer row that `find_cached` will prefer.
    pub async fn insert(&self, search: NewGiftSearch) -> Result<String> {
        let id = uuid::Uuid::new_v4().to_string();

        let model = gift_searches::ActiveModel {
            id: Set(id.clone()),
            platform: Set(search.platform.as_str().to_string()),
            username: Set(search.username),
            profile_url: Set(search.profile_url),
            profile_data: Set(serde_json::to_string(&search.profile_data)?),
            gifts: Set(serde_json::to_string(&search.gifts)?),
            created_at: Set(search.created_at.to_rfc3339()),
            expires_at: Set(search.expires_at.to_rfc3339()),
        };

        GiftSearches::insert(model).exec(&self.conn).await?;

        Ok(id)
    }

    /// Rows created strictly after `cutoff`, capped at `limit`. No ordering
    /// guarantee beyond the store's natural insertion order.
    pub async fn recent_since(
        &self,
        cutoff: &str,
        limit: u64,
    ) -> Result<Vec<gift_searches::Model>> {
        let rows = GiftSearches::find()
            .filter(gift_searches::Column::CreatedAt.gt(cutoff))
            .limit(limit)
            .all(&self.conn)
            .await?;

        Ok(rows)
    }
}
