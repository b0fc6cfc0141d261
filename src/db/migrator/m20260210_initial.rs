use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GiftSearches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GiftSearches::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GiftSearches::Platform).string().not_null())
                    .col(ColumnDef::new(GiftSearches::Username).string().not_null())
                    .col(ColumnDef::new(GiftSearches::ProfileUrl).text().not_null())
                    .col(ColumnDef::new(GiftSearches::ProfileData).text().not_null())
                    .col(ColumnDef::new(GiftSearches::Gifts).text().not_null())
                    .col(
                        ColumnDef::new(GiftSearches::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GiftSearches::ExpiresAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup key for the cache path.
        manager
            .create_index(
                Index::create()
                    .name("idx_gift_searches_profile_platform")
                    .table(GiftSearches::Table)
                    .col(GiftSearches::ProfileUrl)
                    .col(GiftSearches::Platform)
                    .to_owned(),
            )
            .await?;

        // Trending scans filter on recency.
        manager
            .create_index(
                Index::create()
                    .name("idx_gift_searches_created_at")
                    .table(GiftSearches::Table)
                    .col(GiftSearches::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GiftSearches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GiftSearches {
    Table,
    Id,
    Platform,
    Username,
    ProfileUrl,
    ProfileData,
    Gifts,
    CreatedAt,
    ExpiresAt,
}
