use crate::server::{data::listing_image::ListingImageRepository, model::listing::NewListingImage};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use test_utils::{builder::TestBuilder, factory};

mod create_many;
