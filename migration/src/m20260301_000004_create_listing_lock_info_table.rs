use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListingLockInfo::Table)
                    .if_not_exists()
                    .col(pk_auto(ListingLockInfo::Id))
                    .col(integer(ListingLockInfo::ListingId))
                    .col(string(ListingLockInfo::LockId))
                    .col(integer(ListingLockInfo::Status).default(1))
                    .col(
                        timestamp(ListingLockInfo::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_listing_lock_info_listing_id_status")
                    .table(ListingLockInfo::Table)
                    .col(ListingLockInfo::ListingId)
                    .col(ListingLockInfo::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListingLockInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ListingLockInfo {
    Table,
    Id,
    ListingId,
    LockId,
    Status,
    CreatedAt,
}
