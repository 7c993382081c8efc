use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listing::Table)
                    .if_not_exists()
                    .col(pk_auto(Listing::ListingId))
                    .col(big_integer_uniq(Listing::Id))
                    .col(string(Listing::Name))
                    .col(text(Listing::Description))
                    .col(string(Listing::ExternalListingName))
                    .col(string(Listing::Address))
                    .col(integer(Listing::Guests))
                    .col(double(Listing::Price))
                    .col(integer(Listing::GuestsIncluded))
                    .col(double(Listing::PriceForExtraPerson))
                    .col(string(Listing::CurrencyCode))
                    .col(string(Listing::InternalListingName))
                    .col(string(Listing::Country))
                    .col(string(Listing::CountryCode))
                    .col(string(Listing::State))
                    .col(string(Listing::City))
                    .col(string(Listing::Street))
                    .col(string(Listing::Zipcode))
                    .col(double(Listing::Lat))
                    .col(double(Listing::Lng))
                    .col(string(Listing::PropertyType))
                    .col(integer(Listing::CheckInTimeStart))
                    .col(integer(Listing::CheckInTimeEnd))
                    .col(integer(Listing::CheckOutTime))
                    .col(string(Listing::WifiUsername))
                    .col(string(Listing::WifiPassword))
                    .col(string(Listing::BookingcomPropertyRoomName))
                    .col(
                        timestamp(Listing::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Listing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Listing {
    Table,
    ListingId,
    Id,
    Name,
    Description,
    ExternalListingName,
    Address,
    Guests,
    Price,
    GuestsIncluded,
    PriceForExtraPerson,
    CurrencyCode,
    InternalListingName,
    Country,
    CountryCode,
    State,
    City,
    Street,
    Zipcode,
    Lat,
    Lng,
    PropertyType,
    CheckInTimeStart,
    CheckInTimeEnd,
    CheckOutTime,
    WifiUsername,
    WifiPassword,
    BookingcomPropertyRoomName,
    CreatedAt,
}
