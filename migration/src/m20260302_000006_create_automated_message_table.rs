use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AutomatedMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(AutomatedMessage::Id))
                    .col(string(AutomatedMessage::MessageType))
                    .col(text(AutomatedMessage::SmsMessage))
                    .col(text(AutomatedMessage::EmailMessage))
                    .col(text(AutomatedMessage::AirBnbMessage))
                    .col(
                        timestamp(AutomatedMessage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(AutomatedMessage::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AutomatedMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AutomatedMessage {
    Table,
    Id,
    MessageType,
    SmsMessage,
    EmailMessage,
    AirBnbMessage,
    CreatedAt,
    UpdatedAt,
}
