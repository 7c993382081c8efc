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
                    .table(ListingImage::Table)
                    .if_not_exists()
                    .col(pk_auto(ListingImage::Id))
                    .col(integer(ListingImage::ListingId))
                    .col(text_null(ListingImage::Caption))
                    .col(text_null(ListingImage::VrboCaption))
                    .col(text_null(ListingImage::AirbnbCaption))
                    .col(text(ListingImage::Url))
                    .col(integer(ListingImage::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_image_listing_id")
                            .from(ListingImage::Table, ListingImage::ListingId)
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
            .drop_table(Table::drop().table(ListingImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ListingImage {
    Table,
    Id,
    ListingId,
    Caption,
    VrboCaption,
    AirbnbCaption,
    Url,
    SortOrder,
}
