use sea_orm::entity::prelude::*;

/// One cached analysis. Rows are insert-only; expiry is a timestamp
/// comparison at read time, expired rows are never deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gift_searches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub platform: String,
    pub username: String,
    #[sea_orm(column_type = "Text")]
    pub profile_url: String,
    /// JSON: {bio?, interests[], themes[]}
    #[sea_orm(column_type = "Text")]
    pub profile_data: String,
    /// JSON: GiftItem[]
    #[sea_orm(column_type = "Text")]
    pub gifts: String,
    pub created_at: String, // RFC3339, SQLite stores timestamps as text
    pub expires_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
