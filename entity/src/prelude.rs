pub use super::automated_message::Entity as AutomatedMessage;
pub use super::guide_book::Entity as GuideBook;
pub use super::listing::Entity as Listing;
pub use super::listing_image::Entity as ListingImage;
pub use super::listing_lock_info::Entity as ListingLockInfo;
pub use super::upsell::Entity as Upsell;
