//! Listing factory for creating test listing entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test listings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::listing::ListingFactory;
///
/// let listing = ListingFactory::new(&db)
///     .id(42)
///     .name("Lake House")
///     .build()
///     .await?;
/// ```
pub struct ListingFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    name: String,
    city: String,
    price: f64,
    wifi_username: String,
    wifi_password: String,
}

impl<'a> ListingFactory<'a> {
    /// Creates a new ListingFactory with default values.
    ///
    /// Defaults:
    /// - id: unique value from `next_id()`, offset to avoid colliding with small literal ids
    /// - name: `"Listing {id}"`
    /// - city: `"Austin"`
    /// - price: `150.0`
    /// - wifi credentials: `"guest-wifi"` / `"password123"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = 100_000 + next_id() as i64;
        Self {
            db,
            id,
            name: format!("Listing {}", id),
            city: "Austin".to_string(),
            price: 150.0,
            wifi_username: "guest-wifi".to_string(),
            wifi_password: "password123".to_string(),
        }
    }

    /// Sets the HostAway listing identifier.
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the listing name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the listing city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the nightly price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the listing entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - Created listing entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::listing::Model, DbErr> {
        entity::listing::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("A cozy test listing".to_string()),
            external_listing_name: ActiveValue::Set(String::new()),
            address: ActiveValue::Set("1 Test Street".to_string()),
            guests: ActiveValue::Set(4),
            price: ActiveValue::Set(self.price),
            guests_included: ActiveValue::Set(2),
            price_for_extra_person: ActiveValue::Set(0.0),
            currency_code: ActiveValue::Set("USD".to_string()),
            internal_listing_name: ActiveValue::Set(String::new()),
            country: ActiveValue::Set("United States".to_string()),
            country_code: ActiveValue::Set("US".to_string()),
            state: ActiveValue::Set("TX".to_string()),
            city: ActiveValue::Set(self.city),
            street: ActiveValue::Set("Test Street".to_string()),
            zipcode: ActiveValue::Set("78701".to_string()),
            lat: ActiveValue::Set(0.0),
            lng: ActiveValue::Set(0.0),
            property_type: ActiveValue::Set(String::new()),
            check_in_time_start: ActiveValue::Set(15),
            check_in_time_end: ActiveValue::Set(22),
            check_out_time: ActiveValue::Set(11),
            wifi_username: ActiveValue::Set(self.wifi_username),
            wifi_password: ActiveValue::Set(self.wifi_password),
            bookingcom_property_room_name: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a listing with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - Created listing entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_listing(db: &DatabaseConnection) -> Result<entity::listing::Model, DbErr> {
    ListingFactory::new(db).build().await
}
