use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Upsell::Table)
                    .if_not_exists()
                    .col(pk_auto(Upsell::Id))
                    .col(string(Upsell::Title))
                    .col(text(Upsell::Description))
                    .col(double(Upsell::Price))
                    .col(string(Upsell::TimePeriod))
                    .col(string(Upsell::Availability))
                    .col(integer(Upsell::Status).default(1))
                    .col(
                        timestamp(Upsell::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Upsell::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Upsell::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Upsell {
    Table,
    Id,
    Title,
    Description,
    Price,
    TimePeriod,
    Availability,
    Status,
    CreatedAt,
    UpdatedAt,
}
