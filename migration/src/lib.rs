pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_listing_table;
mod m20260301_000002_create_listing_image_table;
mod m20260301_000003_create_guide_book_table;
mod m20260301_000004_create_listing_lock_info_table;
mod m20260302_000005_create_upsell_table;
mod m20260302_000006_create_automated_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_listing_table::Migration),
            Box::new(m20260301_000002_create_listing_image_table::Migration),
            Box::new(m20260301_000003_create_guide_book_table::Migration),
            Box::new(m20260301_000004_create_listing_lock_info_table::Migration),
            Box::new(m20260302_000005_create_upsell_table::Migration),
            Box::new(m20260302_000006_create_automated_message_table::Migration),
        ]
    }
}
