use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_listing_table::Listing;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuideBook::Table)
                    .if_not_exists()
                    .col(pk_auto(GuideBook::Id))
                    .col(integer_uniq(GuideBook::ListingId))
                    .col(text(GuideBook::Content))
                    .col(boolean(GuideBook::IsActive).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guide_book_listing_id")
                            .from(GuideBook::Table, GuideBook::ListingId)
                            .to(Listing::Table, Listing::ListingId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuideBook::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GuideBook {
    Table,
    Id,
    ListingId,
    Content,
    IsActive,
}
